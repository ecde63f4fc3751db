use anyhow::Result;

use crate::{
    homematic::{Datapoint, FaultCode},
    i18n::Translate,
};

/// Renders the fault banner for a `FAULT_REPORTING` datapoint.
///
/// Wall thermostats report no faults; they, "no fault" and unassigned codes
/// all produce an empty string.
pub fn describe_fault(fault: Option<&Datapoint>, translations: &impl Translate) -> Result<String> {
    let Some(fault) = fault else {
        return Ok(String::new());
    };

    let key = FaultCode::from_code(fault.as_f64()?).and_then(|code| code.translation_key());

    Ok(match key {
        Some(key) => format!(
            "<span class='faultReporting'>{}{}</span>",
            translations.translate("WARNING"),
            translations.translate(key)
        ),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::i18n::{Locale, Translations};

    use super::*;

    fn describe(code: &str) -> String {
        describe_fault(
            Some(&Datapoint::new(code, "")),
            &Translations::for_locale(Locale::En),
        )
        .unwrap()
    }

    #[test]
    fn low_battery_banner() {
        assert_eq!(
            describe("6"),
            "<span class='faultReporting'>Warning: low battery</span>"
        );
    }

    #[test]
    fn every_assigned_code_has_a_message() {
        for code in ["1", "2", "3", "4", "6", "7"] {
            assert!(describe(code).starts_with("<span class='faultReporting'>Warning: "));
        }
    }

    #[test]
    fn no_banner_without_a_fault() {
        assert_eq!(describe("0"), "");
        assert_eq!(describe("5"), "");
        assert_eq!(describe("42"), "");
    }

    #[test]
    fn no_banner_for_wall_thermostats() {
        let translations = Translations::for_locale(Locale::En);

        assert_eq!(describe_fault(None, &translations).unwrap(), "");
    }
}
