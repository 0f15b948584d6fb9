//! Property-based tests for studio state
//!
//! Uses proptest to check selection and prompt-cycling invariants over
//! arbitrary action sequences.

use proptest::prelude::*;
use vibestudio_core::{derive_style, palette_index, Studio, StyleMemo, PALETTES, PROMPTS};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Either a real palette id or arbitrary short text
fn palette_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(PALETTES.iter().map(|p| p.id).collect::<Vec<_>>())
            .prop_map(str::to_string),
        1 => prop::string::string_regex("[a-zA-Z ]{0,12}").expect("valid regex"),
    ]
}

/// User actions on the studio view
#[derive(Debug, Clone)]
enum Action {
    Select(String),
    Advance,
}

fn actions_strategy(max: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            palette_id_strategy().prop_map(Action::Select),
            Just(Action::Advance),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// k advances from fresh land on PROMPTS[k mod N]
    #[test]
    fn prompt_after_k_advances(k in 0usize..200) {
        let mut studio = Studio::new();
        for _ in 0..k {
            studio.advance_prompt();
        }
        prop_assert_eq!(studio.current_prompt(), PROMPTS[k % PROMPTS.len()]);
    }

    /// N advances from any reachable cursor close the cycle
    #[test]
    fn prompt_cycle_closes(start in 0usize..50) {
        let mut studio = Studio::new();
        for _ in 0..start {
            studio.advance_prompt();
        }
        let before = studio.prompt_cursor();
        for _ in 0..PROMPTS.len() {
            studio.advance_prompt();
        }
        prop_assert_eq!(studio.prompt_cursor(), before);
    }

    /// Known ids select their entry; anything else leaves the selection alone
    #[test]
    fn select_matches_catalog(actions in actions_strategy(40)) {
        let mut studio = Studio::new();
        for action in actions {
            match action {
                Action::Select(id) => {
                    let before = studio.current_palette().id;
                    let accepted = studio.select_palette(&id);
                    match palette_index(&id) {
                        Some(index) => {
                            prop_assert!(accepted);
                            prop_assert_eq!(studio.current_palette(), &PALETTES[index]);
                        }
                        None => {
                            prop_assert!(!accepted);
                            prop_assert_eq!(studio.current_palette().id, before);
                        }
                    }
                }
                Action::Advance => {
                    studio.advance_prompt();
                }
            }

            prop_assert!(studio.prompt_cursor() < PROMPTS.len());
            let active = studio.palette_entries().filter(|e| e.active).count();
            prop_assert_eq!(active, 1);
        }
    }

    /// The memo always agrees with a fresh derivation
    #[test]
    fn memo_agrees_with_derive(ids in prop::collection::vec(palette_id_strategy(), 0..30)) {
        let mut studio = Studio::new();
        let mut memo = StyleMemo::new();
        for id in ids {
            studio.select_palette(&id);
            let palette = studio.current_palette();
            prop_assert_eq!(memo.get(palette), &derive_style(palette));
        }
    }
}
