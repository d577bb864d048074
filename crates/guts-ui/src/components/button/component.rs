use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLoaderCircle;
use dioxus_free_icons::Icon;

use super::variants::{button_variants, ButtonSize, ButtonVariant};

/// What a delegating button hands to its child renderer.
///
/// `attributes` already carry the resolved class, the `data-slot` marker,
/// the caller's passthrough attributes and either the click listener or
/// the disabled markers. `children` is the resolved content, loading
/// overlay included.
#[derive(Clone, PartialEq)]
pub struct ButtonSlot {
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// A styled button.
///
/// With `as_child` set, no `<button>` is rendered: the callback receives a
/// [`ButtonSlot`] and renders the single element that stands in for it.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Extra classes, appended after the resolved variant classes.
    #[props(default)]
    pub class: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    /// Disables the button and swaps its content for the loading indicator.
    #[props(default = false)]
    pub loading: bool,
    /// Replaces the default spinner while loading.
    #[props(default)]
    pub loading_icon: Option<Element>,
    /// Shown after the loading icon; when empty the children stay visible.
    #[props(default)]
    pub loading_text: Option<String>,
    #[props(default)]
    pub as_child: Option<Callback<ButtonSlot, Element>>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let inert = props.disabled || props.loading;
    let onclick = props.onclick;

    let base = vec![
        Attribute::new(
            "class",
            button_variants(props.variant, props.size, props.class.as_deref()),
            None,
            false,
        ),
        Attribute::new("data-slot", "button", None, false),
    ];
    let mut merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    if props.loading {
        merged.push(Attribute::new("aria-busy", "true", None, false));
    }

    let content = if props.loading {
        let icon = props
            .loading_icon
            .unwrap_or_else(|| rsx! { LoadingSpinner {} });
        match props.loading_text.filter(|text| !text.is_empty()) {
            Some(text) => rsx! {
                {icon}
                "{text}"
            },
            None => rsx! {
                {icon}
                {props.children}
            },
        }
    } else {
        props.children
    };

    match props.as_child {
        Some(render) => {
            if inert {
                merged.push(Attribute::new("disabled", true, None, false));
                merged.push(Attribute::new("aria-disabled", "true", None, false));
            } else if let Some(handler) = onclick {
                merged.push(dioxus_elements::events::onclick(move |evt: MouseEvent| {
                    handler.call(evt);
                }));
            }
            render.call(ButtonSlot {
                attributes: merged,
                children: content,
            })
        }
        None => rsx! {
            button {
                disabled: inert,
                onclick: move |evt| {
                    if inert {
                        return;
                    }
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                ..merged,
                {content}
            }
        },
    }
}

/// Default loading indicator.
#[component]
fn LoadingSpinner() -> Element {
    rsx! {
        Icon::<LdLoaderCircle> { icon: LdLoaderCircle, width: 16, height: 16, class: "animate-spin" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn disabled_attr(html: &str) -> bool {
        html.contains("disabled=")
    }

    #[test]
    fn renders_button_with_resolved_class() {
        fn app() -> Element {
            rsx! { Button { "Save" } }
        }
        let html = render(app);
        assert!(html.starts_with("<button"));
        assert!(html.contains("bg-primary"));
        assert!(html.contains("h-9 px-4 py-2"));
        assert!(html.contains(r#"data-slot="button""#));
        assert!(html.contains(">Save</button>"));
        assert!(!disabled_attr(&html));
    }

    #[test]
    fn variant_size_and_extra_class_are_applied() {
        fn app() -> Element {
            rsx! {
                Button {
                    variant: ButtonVariant::Destructive,
                    size: ButtonSize::Sm,
                    class: "w-full",
                    "Delete"
                }
            }
        }
        let html = render(app);
        assert!(html.contains("bg-destructive"));
        assert!(html.contains("h-8"));
        assert!(html.contains("w-full"));
    }

    #[test]
    fn passthrough_attributes_are_forwarded() {
        fn app() -> Element {
            rsx! {
                Button { id: "save-btn", aria_label: "Save document", "Save" }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"id="save-btn""#));
        assert!(html.contains(r#"aria-label="Save document""#));
    }

    #[test]
    fn disabled_flag_disables_button() {
        fn app() -> Element {
            rsx! { Button { disabled: true, "Disabled" } }
        }
        assert!(disabled_attr(&render(app)));
    }

    #[test]
    fn loading_forces_disabled_even_when_enabled() {
        fn app() -> Element {
            rsx! { Button { loading: true, disabled: false, "Click Me" } }
        }
        let html = render(app);
        assert!(disabled_attr(&html));
        assert!(html.contains(r#"aria-busy="true""#));
    }

    #[test]
    fn loading_without_text_keeps_children_after_spinner() {
        fn app() -> Element {
            rsx! { Button { loading: true, "Click Me" } }
        }
        let html = render(app);
        let spinner = html.find("<svg").expect("spinner rendered");
        let label = html.find("Click Me").expect("children rendered");
        assert!(spinner < label);
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn loading_text_replaces_children() {
        fn app() -> Element {
            rsx! {
                Button { loading: true, loading_text: "Saving...", "Click Me" }
            }
        }
        let html = render(app);
        assert!(html.contains("Saving..."));
        assert!(!html.contains("Click Me"));
        assert!(html.find("<svg").unwrap() < html.find("Saving...").unwrap());
    }

    #[test]
    fn empty_loading_text_falls_back_to_children() {
        fn app() -> Element {
            rsx! {
                Button { loading: true, loading_text: "", "Click Me" }
            }
        }
        assert!(render(app).contains("Click Me"));
    }

    #[test]
    fn custom_loading_icon_replaces_spinner() {
        fn app() -> Element {
            rsx! {
                Button {
                    loading: true,
                    loading_icon: rsx! { span { class: "dots", "..." } },
                    loading_text: "Working",
                    "Click Me"
                }
            }
        }
        let html = render(app);
        assert!(!html.contains("animate-spin"));
        assert!(html.find(r#"class="dots""#).unwrap() < html.find("Working").unwrap());
    }

    #[test]
    fn not_loading_renders_children_unchanged() {
        fn app() -> Element {
            rsx! {
                Button { loading_text: "Saving...", span { "Search" } }
            }
        }
        let html = render(app);
        assert!(html.contains("<span>Search</span>"));
        assert!(!html.contains("Saving..."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn as_child_renders_only_the_child() {
        fn app() -> Element {
            rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    as_child: move |slot: ButtonSlot| rsx! {
                        a { href: "/docs", ..slot.attributes, {slot.children} }
                    },
                    "Docs"
                }
            }
        }
        let html = render(app);
        assert!(html.starts_with("<a"));
        assert!(!html.contains("<button"));
        assert!(html.contains(r#"href="/docs""#));
        assert!(html.contains("bg-background"));
        assert!(html.contains(r#"data-slot="button""#));
        assert!(html.ends_with(">Docs</a>"));
        assert!(!disabled_attr(&html));
    }

    #[test]
    fn as_child_while_loading_marks_child_disabled() {
        fn app() -> Element {
            rsx! {
                Button {
                    loading: true,
                    loading_text: "Loading",
                    as_child: move |slot: ButtonSlot| rsx! {
                        a { href: "/next", ..slot.attributes, {slot.children} }
                    },
                    "Next"
                }
            }
        }
        let html = render(app);
        assert!(html.starts_with("<a"));
        assert!(disabled_attr(&html));
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(html.contains("Loading"));
        assert!(!html.contains("Next<"));
    }

    #[test]
    fn rendering_is_idempotent() {
        fn app() -> Element {
            rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Lg,
                    loading: true,
                    "Again"
                }
            }
        }
        assert_eq!(render(app), render(app));
    }
}
