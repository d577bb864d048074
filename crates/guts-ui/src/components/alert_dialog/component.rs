use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

use crate::components::button::{button_variants, ButtonSize, ButtonVariant};
use crate::utils::cn;

const OVERLAY: &str = "fixed inset-0 z-50 bg-black/50 data-[state=open]:animate-in \
    data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";

const CONTENT: &str = "bg-background fixed top-[50%] left-[50%] z-50 grid w-full \
    max-w-[calc(100%-2rem)] translate-x-[-50%] translate-y-[-50%] gap-4 rounded-lg border p-6 \
    shadow-lg duration-200 sm:max-w-lg data-[state=open]:animate-in data-[state=closed]:animate-out \
    data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 data-[state=closed]:zoom-out-95 \
    data-[state=open]:zoom-in-95";

#[component]
pub fn AlertDialogRoot(mut props: prim::AlertDialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", OVERLAY, None, false));

    rsx! {
        prim::AlertDialogRoot { ..props }
    }
}

#[component]
pub fn AlertDialogContent(mut props: prim::AlertDialogContentProps) -> Element {
    props.class = Some(cn([Some(CONTENT), props.class.as_deref()]));

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}

/// Groups the title and description at the top of the dialog.
#[component]
pub fn AlertDialogHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new(
        "class",
        "flex flex-col gap-2 text-center sm:text-left",
        None,
        false,
    )];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn AlertDialogTitle(mut props: prim::AlertDialogTitleProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "text-lg font-semibold",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogTitle { ..props }
    }
}

#[component]
pub fn AlertDialogDescription(mut props: prim::AlertDialogDescriptionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "text-muted-foreground text-sm",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogDescription { ..props }
    }
}

#[component]
pub fn AlertDialogActions(mut props: prim::AlertDialogActionsProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end",
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogActions { ..props }
    }
}

/// Confirming action, styled as a default button.
#[component]
pub fn AlertDialogAction(mut props: prim::AlertDialogActionProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        button_variants(ButtonVariant::Default, ButtonSize::Default, None),
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogAction { ..props }
    }
}

/// Cancelling action, styled as an outline button.
#[component]
pub fn AlertDialogCancel(mut props: prim::AlertDialogCancelProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        button_variants(ButtonVariant::Outline, ButtonSize::Default, None),
        None,
        false,
    ));

    rsx! {
        prim::AlertDialogCancel { ..props }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_merges_caller_classes() {
        fn app() -> Element {
            rsx! {
                AlertDialogHeader { class: "mb-2", "Heading" }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.starts_with("<div"));
        assert!(html.contains("flex flex-col gap-2"));
        assert!(html.contains("mb-2"));
        assert!(html.contains("Heading"));
    }
}
