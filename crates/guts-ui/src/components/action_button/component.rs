use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdTriangleAlert;
use dioxus_free_icons::Icon;

use crate::components::alert_dialog::{
    use_alert_dialog, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogHeader, AlertDialogRoot, AlertDialogTitle, ConfirmIntent,
    ConfirmOutcome,
};
use crate::components::button::{Button, ButtonSize, ButtonSlot, ButtonVariant};

pub const DEFAULT_TITLE: &str = "Are you sure?";
pub const DEFAULT_DESCRIPTION: &str = "This action cannot be undone.";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";
pub const DEFAULT_OK_TEXT: &str = "Continue";

/// A button that asks for confirmation before running its action.
///
/// Activating the button opens an alert dialog; `on_ok` runs when the user
/// confirms and `on_cancel` when they cancel. Dismissing the dialog any other
/// way closes it without calling either.
///
/// The trigger fields (`variant` through `children`) are handed to
/// [`Button`] as-is, except that `destructive` forces the destructive
/// variant. `onclick` runs before the dialog opens.
#[derive(Props, Clone, PartialEq)]
pub struct ActionButtonProps {
    #[props(default = false)]
    pub destructive: bool,
    #[props(default = DEFAULT_TITLE.to_string(), into)]
    pub title: String,
    #[props(default = DEFAULT_DESCRIPTION.to_string(), into)]
    pub description: String,
    /// Replaces the warning glyph shown next to the description.
    #[props(default)]
    pub icon: Option<Element>,
    /// Hides the dialog icon, including an explicit `icon`.
    #[props(default = false)]
    pub hide_icon: bool,
    #[props(default = DEFAULT_CANCEL_TEXT.to_string(), into)]
    pub cancel_text: String,
    #[props(default = DEFAULT_OK_TEXT.to_string(), into)]
    pub ok_text: String,
    #[props(default)]
    pub on_cancel: Option<EventHandler<()>>,
    #[props(default)]
    pub on_ok: Option<EventHandler<()>>,
    #[props(default = false)]
    pub default_open: bool,

    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub class: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub loading: bool,
    #[props(default)]
    pub loading_icon: Option<Element>,
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

fn trigger_variant(destructive: bool, variant: ButtonVariant) -> ButtonVariant {
    if destructive {
        ButtonVariant::Destructive
    } else {
        variant
    }
}

/// Run the caller's click handler, then ask the dialog to open.
pub(crate) fn activate(
    onclick: impl FnOnce(),
    send: impl FnOnce(ConfirmIntent) -> ConfirmOutcome,
) -> ConfirmOutcome {
    onclick();
    send(ConfirmIntent::Open)
}

/// Send an action intent and run the callback for the outcome it produced.
///
/// Callbacks only run when the intent resolved the open cycle, so a repeated
/// click on an already-resolved dialog calls nothing.
pub(crate) fn dispatch(
    send: impl FnOnce(ConfirmIntent) -> ConfirmOutcome,
    intent: ConfirmIntent,
    on_ok: impl FnOnce(),
    on_cancel: impl FnOnce(),
) -> ConfirmOutcome {
    let outcome = send(intent);
    match outcome {
        ConfirmOutcome::Confirmed => on_ok(),
        ConfirmOutcome::Cancelled => on_cancel(),
        ConfirmOutcome::Opened | ConfirmOutcome::Dismissed | ConfirmOutcome::Ignored => {}
    }
    outcome
}

/// Which glyph the dialog shows next to its description.
pub(crate) enum IconSlot {
    Hidden,
    Custom(Element),
    Warning,
}

pub(crate) fn icon_slot(icon: Option<Element>, hide_icon: bool) -> IconSlot {
    match (hide_icon, icon) {
        (true, _) => IconSlot::Hidden,
        (false, Some(icon)) => IconSlot::Custom(icon),
        (false, None) => IconSlot::Warning,
    }
}

#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let dialog = use_alert_dialog(props.default_open);
    let title = props.title.clone();
    let onclick = props.onclick;
    let on_ok = props.on_ok;
    let on_cancel = props.on_cancel;
    let run_ok = move || {
        if let Some(handler) = on_ok {
            handler.call(());
        }
    };
    let run_cancel = move || {
        if let Some(handler) = on_cancel {
            handler.call(());
        }
    };

    let alert_icon = match icon_slot(props.icon.clone(), props.hide_icon) {
        IconSlot::Hidden => rsx! {},
        IconSlot::Custom(icon) => icon,
        IconSlot::Warning => rsx! {
            Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 40, height: 40, class: "size-10" }
        },
    };

    let description = props.description.clone();
    let cancel_text = props.cancel_text.clone();
    let ok_text = props.ok_text.clone();
    let open_title = title.clone();
    let ok_title = title.clone();
    let cancel_title = title.clone();
    let change_title = title.clone();

    rsx! {
        Button {
            variant: trigger_variant(props.destructive, props.variant),
            size: props.size,
            class: props.class.clone(),
            disabled: props.disabled,
            loading: props.loading,
            loading_icon: props.loading_icon.clone(),
            loading_text: props.loading_text.clone(),
            as_child: props.as_child,
            attributes: props.attributes.clone(),
            onclick: move |evt: MouseEvent| {
                let outcome = activate(
                    || {
                        if let Some(handler) = onclick {
                            handler.call(evt);
                        }
                    },
                    |intent| dialog.send(intent),
                );
                tracing::debug!(title = %open_title, ?outcome, "action button activated");
            },
            {props.children}
        }
        AlertDialogRoot {
            open: dialog.is_open(),
            on_open_change: move |open: bool| {
                let outcome = dialog.on_open_change(open);
                tracing::debug!(title = %change_title, open, ?outcome, "confirmation open state changed");
            },
            AlertDialogContent {
                AlertDialogHeader {
                    AlertDialogTitle { "{title}" }
                    div { class: "flex items-center gap-4",
                        {alert_icon}
                        AlertDialogDescription { "{description}" }
                    }
                }
                AlertDialogActions {
                    AlertDialogCancel {
                        on_click: move |_| {
                            let outcome = dispatch(
                                |intent| dialog.send(intent),
                                ConfirmIntent::Cancel,
                                run_ok,
                                run_cancel,
                            );
                            tracing::debug!(title = %cancel_title, ?outcome, "confirmation cancelled");
                        },
                        "{cancel_text}"
                    }
                    AlertDialogAction {
                        on_click: move |_| {
                            let outcome = dispatch(
                                |intent| dialog.send(intent),
                                ConfirmIntent::Confirm,
                                run_ok,
                                run_cancel,
                            );
                            tracing::debug!(title = %ok_title, ?outcome, "confirmation accepted");
                        },
                        "{ok_text}"
                    }
                }
            }
        }
    }
}
