use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use yuuka::derive_struct;

// Include translation TOML at compile time
const EN_US_TOML: &str = include_str!("../res/i18n/en_us.toml");
const ZH_CHS_TOML: &str = include_str!("../res/i18n/zh_chs.toml");
const ZH_CHT_TOML: &str = include_str!("../res/i18n/zh_cht.toml");

derive_struct! {
    #[derive(PartialEq, Serialize, Deserialize)]
    pub Lang {
        title: String = "title".to_string(),
        slot_label: String = "slot_label".to_string(),
        module_info_title: String = "module_info_title".to_string(),
        // module info box labels
        label_description: String = "label_description".to_string(),
        label_art_number: String = "label_art_number".to_string(),
        label_fw_version: String = "label_fw_version".to_string(),
        unknown_module: String = "unknown_module".to_string(),
        press_q_quit: String = "press_q_quit".to_string(),
    }
}

static LANG_SELECTED: OnceCell<Lang> = OnceCell::new();
static LOCALE: OnceCell<String> = OnceCell::new();

fn parse_toml_to_lang(content: &str) -> Lang {
    match toml::from_str::<Lang>(content) {
        Ok(l) => l,
        Err(e) => {
            log::warn!(
                "i18n: failed to parse toml: {}\ncontent preview: {}",
                e,
                &content.chars().take(200).collect::<String>()
            );
            // Keys as values
            Lang::default()
        }
    }
}

/// Return a reference to the currently selected `Lang`.
/// Callers can access fields directly, e.g. `i18n::lang().title`.
pub fn lang() -> &'static Lang {
    LANG_SELECTED.get_or_init(Lang::default)
}

/// Map locale preferences (as found in `LANGUAGE`/`LC_ALL`/`LANG`) to one of
/// the bundled locales.
fn match_locale(prefs: &[String]) -> &'static str {
    for p in prefs {
        if p.contains("zh") {
            if p.contains("tw") || p.contains("hk") || p.contains("cht") {
                return "zh_cht";
            }
            return "zh_chs";
        }
        if p.contains("en") {
            return "en_us";
        }
    }
    "en_us"
}

pub fn init_i18n() {
    let mut prefs: Vec<String> = Vec::new();
    if let Ok(v) = std::env::var("LANGUAGE") {
        prefs.extend(v.split(':').map(|s| s.to_lowercase()));
    }
    if let Ok(v) = std::env::var("LC_ALL") {
        prefs.push(v.to_lowercase());
    }
    if let Ok(v) = std::env::var("LANG") {
        prefs.push(v.to_lowercase());
    }

    let locale = match_locale(&prefs);
    let content = match locale {
        "zh_chs" => ZH_CHS_TOML,
        "zh_cht" => ZH_CHT_TOML,
        _ => EN_US_TOML,
    };

    LOCALE.set(locale.to_string()).ok();
    if LANG_SELECTED.set(parse_toml_to_lang(content)).is_err() {
        log::warn!("i18n: language already selected, keeping previous choice");
    }

    let user = whoami::username();
    log::info!(
        "i18n: user={} locale={}",
        user,
        LOCALE.get().map(|s| s.as_str()).unwrap_or("-")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_translations_parse() {
        for content in [EN_US_TOML, ZH_CHS_TOML, ZH_CHT_TOML] {
            let parsed = parse_toml_to_lang(content);
            assert!(parsed != Lang::default());
        }
        assert_eq!(
            parse_toml_to_lang(EN_US_TOML).label_fw_version,
            "Firmware version"
        );
    }

    #[test]
    fn test_translation_files_match_lang_fields() -> anyhow::Result<()> {
        let defaults = toml::to_string(&Lang::default())?;
        let expected: Vec<String> = toml::from_str::<toml::Table>(&defaults)?
            .keys()
            .cloned()
            .collect();
        for content in [EN_US_TOML, ZH_CHS_TOML, ZH_CHT_TOML] {
            let table: toml::Table = toml::from_str(content)?;
            let keys: Vec<String> = table.keys().cloned().collect();
            assert_eq!(keys, expected);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_toml_falls_back_to_keys() {
        let parsed = parse_toml_to_lang("title = [");
        assert_eq!(parsed.title, "title");
        assert_eq!(parsed.label_art_number, "label_art_number");
    }

    #[test]
    fn test_match_locale() {
        let prefs = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(match_locale(&prefs(&["zh_tw.utf-8"])), "zh_cht");
        assert_eq!(match_locale(&prefs(&["zh_cn.utf-8"])), "zh_chs");
        assert_eq!(match_locale(&prefs(&["en_gb.utf-8"])), "en_us");
        assert_eq!(match_locale(&prefs(&["de_de.utf-8"])), "en_us");
        assert_eq!(match_locale(&[]), "en_us");
    }
}
