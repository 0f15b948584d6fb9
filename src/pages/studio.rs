//! Studio page - the whole vibe coding studio on one screen.
//!
//! Hero panel on the left (gradient, mood, prompt loop, quick loops), palette
//! picker and rituals in the aside.

use dioxus::prelude::*;
use vibestudio_core::{PaletteEntry, StyleDescriptor};
use vibestudio_ui::{MoodTag, PaletteList, PromptLoop, QuickLoopGrid, RitualList};

use crate::context::{use_studio, use_style_memo};

/// Studio page component.
///
/// The gradient style comes from the shared memo keyed on palette id, so
/// shuffling prompts re-renders without re-deriving it.
#[component]
pub fn StudioPage() -> Element {
    let mut studio = use_studio();
    let style_memo = use_style_memo();

    let palette = studio.read().current_palette();
    let gradient_style = style_memo.borrow_mut().get(palette).to_inline_css();
    let grain_style = StyleDescriptor::grain_inline_css();

    let prompt = studio.read().current_prompt();
    let entries: Vec<PaletteEntry> = studio.read().palette_entries().collect();
    let rituals = studio.read().rituals();
    let quick_loops = studio.read().quick_loops();

    let select_palette = move |id: &'static str| {
        studio.write().select_palette(id);
    };
    let shuffle_prompt = move |_: ()| {
        studio.write().advance_prompt();
    };

    rsx! {
        main { class: "studio",
            div { class: "studio-shell",
                header { class: "studio-header",
                    p { class: "eyebrow", "Vibe Coding Studio" }
                    h1 { class: "studio-title", "Craft the energy you want to code in." }
                    p { class: "studio-intro",
                        "Pick a palette, let the gradient set the mood, and give yourself a ritual so the work "
                        "flows. This studio is a home base for improvisational shipping, late-night breakthroughs, "
                        "and gentle creative loops."
                    }
                }

                section { class: "studio-body",
                    div { class: "hero",
                        div { class: "hero-gradient", style: "{gradient_style}", "aria-hidden": "true" }
                        div { class: "hero-grain", style: "{grain_style}", "aria-hidden": "true" }

                        div { class: "hero-content",
                            div { class: "hero-intro",
                                MoodTag { mood: palette.mood }
                                h2 { class: "hero-title", "{palette.name}" }
                                p { class: "hero-description", "{palette.description}" }
                            }
                            div { class: "hero-loops",
                                PromptLoop { prompt: prompt, on_shuffle: shuffle_prompt }
                                QuickLoopGrid { loops: quick_loops }
                            }
                        }
                    }

                    aside { class: "studio-aside",
                        div { class: "aside-panel",
                            h3 { class: "aside-title", "Palettes" }
                            p { class: "aside-text",
                                "Tap a palette to swap the energy. Each one tunes the gradients and changes the vibe tags."
                            }
                            PaletteList { entries: entries, on_select: select_palette }
                        }

                        div { class: "aside-panel",
                            h3 { class: "aside-title", "Micro Rituals" }
                            p { class: "aside-text",
                                "Pick one ritual per session. The goal is to keep the loop grounded, playful, and intentional."
                            }
                            RitualList { rituals: rituals }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use vibestudio_core::{Studio, StyleMemo};

    use super::*;
    use crate::context::SharedStyleMemo;

    thread_local! {
        static HANDLES: RefCell<Option<(Signal<Studio>, SharedStyleMemo)>> =
            const { RefCell::new(None) };
    }

    /// Stands in for `App`: provides the contexts and mounts the page.
    #[component]
    fn Harness() -> Element {
        let studio = use_signal(Studio::new);
        let style_memo: SharedStyleMemo = use_hook(|| Rc::new(RefCell::new(StyleMemo::new())));

        use_context_provider(|| studio);
        use_context_provider({
            let style_memo = style_memo.clone();
            move || style_memo
        });
        use_hook(|| HANDLES.with(|h| *h.borrow_mut() = Some((studio, style_memo.clone()))));

        rsx! { StudioPage {} }
    }

    fn mount() -> (VirtualDom, Signal<Studio>, SharedStyleMemo) {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let (studio, style_memo) = HANDLES
            .with(|h| h.borrow_mut().take())
            .expect("harness mounted");
        (dom, studio, style_memo)
    }

    fn rerender(dom: &mut VirtualDom) {
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn first_render_derives_once() {
        let (_dom, _studio, style_memo) = mount();
        assert_eq!(style_memo.borrow().computations(), 1);
    }

    #[test]
    fn prompt_shuffle_reuses_gradient() {
        let (mut dom, mut studio, style_memo) = mount();

        for _ in 0..3 {
            dom.in_runtime(|| {
                studio.write().advance_prompt();
            });
            rerender(&mut dom);
        }

        assert_eq!(dom.in_runtime(|| studio.read().prompt_cursor()), 3);
        assert_eq!(style_memo.borrow().computations(), 1);
    }

    #[test]
    fn palette_change_derives_new_gradient() {
        let (mut dom, mut studio, style_memo) = mount();

        dom.in_runtime(|| {
            studio.write().select_palette("tidal");
        });
        rerender(&mut dom);
        assert_eq!(style_memo.borrow().computations(), 2);

        // Unknown id leaves the selection and the cached style alone.
        dom.in_runtime(|| {
            studio.write().select_palette("nonexistent");
        });
        rerender(&mut dom);
        assert_eq!(dom.in_runtime(|| studio.read().current_palette().id), "tidal");
        assert_eq!(style_memo.borrow().computations(), 2);
    }
}
