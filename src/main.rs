use anyhow::Result;

use iot2050_conf::{cli, i18n};

fn main() -> Result<()> {
    env_logger::init();
    i18n::init_i18n();

    let matches = cli::parse_args();
    cli::run(&matches)
}
