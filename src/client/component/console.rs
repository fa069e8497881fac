use dioxus::prelude::*;

use crate::{
    client::{
        api::{auth::redirect_to_login, command::execute},
        config::Endpoints,
        model::{auth::SessionContext, fallback::FallbackMode},
    },
    model::command::{CommandSpec, COMMANDS},
};

use super::{modal::Modal, toast::Toasts};

/// Admin command console: a grid of known commands, an argument modal
/// per command, and on-demand execution against the RCON endpoint.
#[component]
pub fn AdminConsoleCard(players: Vec<String>, address: Option<String>) -> Element {
    let endpoints = use_context::<Endpoints>();
    let session = use_context::<SessionContext>();
    let fallback = use_context::<Signal<Option<FallbackMode>>>();
    let mut toasts = use_context::<Toasts>();

    let mut selected = use_signal(|| None::<usize>);
    let mut values = use_signal(Vec::<String>::new);
    let mut show_modal = use_signal(|| false);
    let mut executing = use_signal(|| false);

    let fallback_active = fallback().unwrap_or(FallbackMode::live()).active();

    let on_execute = move |_| {
        let Some(index) = selected() else {
            return;
        };
        let spec: &'static CommandSpec = &COMMANDS[index];
        let arguments = values();

        if let Err(message) = spec.validate(&arguments) {
            toasts.error("Invalid arguments", message, 4_000);
            return;
        }

        let endpoints = endpoints.clone();
        let fallback = fallback().unwrap_or(FallbackMode::live());

        // Executing without a session makes no sense; send the user to
        // login instead.
        let Some(token) = session.token() else {
            spawn(async move {
                redirect_to_login(&endpoints).await;
            });
            return;
        };

        let Some(address) = address.clone() else {
            toasts.error(
                "Command not sent",
                "The server address has not resolved yet.",
                4_000,
            );
            return;
        };

        executing.set(true);
        spawn(async move {
            match execute(&endpoints, fallback, &token, &address, &spec.request(arguments)).await
            {
                Ok(message) => {
                    toasts.success("Command executed", message, 5_000);
                    show_modal.set(false);
                    selected.set(None);
                }
                Err(error) if error.is_auth_required() => {
                    // The login redirect is already underway.
                }
                Err(error) => {
                    toasts.error("Command failed", error.to_string(), 5_000);
                }
            }
            executing.set(false);
        });
    };

    rsx!(
        div {
            class: "card bg-base-100 border border-base-300 min-h-[400px]",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Admin Console"
                }
                p {
                    class: "text-sm opacity-60",
                    "Issue administrative commands to the game server."
                }
                if !players.is_empty() {
                    div {
                        class: "flex flex-wrap gap-2",
                        span {
                            class: "text-sm opacity-60",
                            "Online:"
                        }
                        for player in players.iter() {
                            span {
                                key: "{player}",
                                class: "badge badge-outline",
                                "{player}"
                            }
                        }
                    }
                }

                if fallback_active {
                    p {
                        class: "text-sm italic opacity-60 pt-4",
                        "You are viewing fallback data. No point in trying to execute commands."
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-4 pt-4",
                        for (index, command) in COMMANDS.iter().enumerate() {
                            button {
                                key: "{command.key}",
                                class: "flex flex-col items-start p-4 border border-base-300 rounded-lg hover:border-primary text-left",
                                onclick: move |_| {
                                    selected.set(Some(index));
                                    values.set(vec![String::new(); COMMANDS[index].args.len()]);
                                    show_modal.set(true);
                                },
                                h3 {
                                    class: "font-semibold",
                                    "{command.name}"
                                }
                                p {
                                    class: "text-xs opacity-60",
                                    "{command.description}"
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(index) = selected() {
            CommandModal {
                index,
                values,
                show: show_modal,
                executing: executing(),
                on_execute,
            }
        }
    )
}

#[component]
fn CommandModal(
    index: usize,
    values: Signal<Vec<String>>,
    show: Signal<bool>,
    executing: bool,
    on_execute: EventHandler<()>,
) -> Element {
    let command = &COMMANDS[index];

    rsx!(
        Modal {
            show,
            title: "{command.name}",
            prevent_close: executing,
            p {
                class: "text-sm opacity-60 mb-4",
                "{command.description}"
            }
            div {
                class: "flex flex-col gap-3",
                for (position, arg) in command.args.iter().enumerate() {
                    div {
                        key: "{arg.name}",
                        class: "form-control flex flex-col gap-1",
                        label {
                            class: "label",
                            span {
                                class: "label-text",
                                "{arg.name}"
                            }
                        }
                        if arg.options.is_empty() {
                            input {
                                r#type: "text",
                                class: "input input-bordered w-full",
                                placeholder: "{arg.placeholder}",
                                value: "{values.read()[position]}",
                                oninput: move |evt| values.write()[position] = evt.value(),
                            }
                        } else {
                            select {
                                class: "select select-bordered w-full",
                                onchange: move |evt| values.write()[position] = evt.value(),
                                option {
                                    value: "",
                                    disabled: true,
                                    selected: values.read()[position].is_empty(),
                                    "{arg.placeholder}"
                                }
                                for option in arg.options {
                                    option {
                                        value: "{option}",
                                        selected: values.read()[position] == *option,
                                        "{option}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: executing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: executing,
                    onclick: move |_| on_execute.call(()),
                    if executing {
                        span { class: "loading loading-spinner loading-sm" }
                        "Executing..."
                    } else {
                        "Execute"
                    }
                }
            }
        }
    )
}
