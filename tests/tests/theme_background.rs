//! Generated theme guardrails.
//!
//! These run against the bundled fixture tree the way a pipeline runs them
//! against freshly generated output.

use tripwire_tests::*;

#[test]
fn background_color_is_red() {
    check_invariant(fixture("src/app/globals.css"), "--background: #FF0000;").unwrap();
}

mod theme_manifest {
    use super::*;

    #[test]
    fn test() {
        Suite::from_manifest(fixture("theme.json"))
            .unwrap()
            .verify()
            .unwrap();
    }
}

mod removed_cards {
    use super::*;

    pub fn suite() -> Suite {
        Suite::new("removed_cards")
            .base_path(fixtures_root())
            .absent("no_learn_more_button", "src/app/page.tsx", "Learn more about Next.js")
            .absent("no_interactive_ui_card", "src/app/page.tsx", "Interactive UI")
            .absent("no_theme_customization_card", "src/app/page.tsx", "Theme Customization")
            .absent("no_responsive_design_card", "src/app/page.tsx", "Responsive Design")
    }

    #[test]
    fn test() {
        suite().verify().unwrap();
    }
}
