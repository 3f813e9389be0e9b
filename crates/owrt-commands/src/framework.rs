//! Command table, shared handler state and the dispatch entry point

use crate::auth::authorize;
use crate::messages;
use crate::request::Request;
use crate::runner::{CommandRunner, Invocation};
use futures::future::BoxFuture;
use owrt_config::Config;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Application data accessible in all handlers
pub struct Data {
    /// Application configuration
    pub config: Arc<Config>,
    /// Executes router commands
    pub runner: Arc<dyn CommandRunner>,
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("config", &self.config)
            .field("runner", &"<CommandRunner>")
            .finish()
    }
}

/// What a handler sees of the current request
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Shared application data
    pub data: &'a Data,
    /// The request being handled
    pub request: &'a Request,
}

impl<'a> Context<'a> {
    /// Application configuration
    pub fn config(&self) -> &'a Config {
        &self.data.config
    }

    /// Command arguments
    pub fn args(&self) -> &'a [String] {
        &self.request.args
    }

    /// Runs an invocation and returns the text to show for it
    pub async fn run(&self, invocation: Invocation) -> String {
        self.data.runner.run(&invocation).await.into_text()
    }
}

/// Future returned by a handler, resolving to the reply text
pub type HandlerFuture<'a> = BoxFuture<'a, String>;

/// Command handler function
pub type Handler = for<'a> fn(Context<'a>) -> HandlerFuture<'a>;

/// One row of the command table
pub struct CommandEntry {
    /// Command name without the leading slash
    pub name: &'static str,
    /// Short description published to the chat client's command menu
    pub description: &'static str,
    /// Handler run once the chat is authorized
    pub handler: Handler,
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// The full command table
pub fn commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry {
            name: "start",
            description: "Список команд",
            handler: crate::start::start,
        },
        CommandEntry {
            name: "clients",
            description: "DHCP-клиенты",
            handler: crate::clients::clients,
        },
        CommandEntry {
            name: "openvpn",
            description: "Статус OpenVPN",
            handler: crate::openvpn::openvpn,
        },
        CommandEntry {
            name: "interfaces",
            description: "Статус LAN, WAN и VPN",
            handler: crate::interfaces::interfaces,
        },
        CommandEntry {
            name: "rua_status",
            description: "Статус ruantiblock",
            handler: crate::ruantiblock::rua_status,
        },
        CommandEntry {
            name: "rua_add",
            description: "Добавить домен в list1",
            handler: crate::ruantiblock::rua_add,
        },
        CommandEntry {
            name: "rua_update",
            description: "Обновить списки ruantiblock",
            handler: crate::ruantiblock::rua_update,
        },
    ]
}

/// Routes requests to handlers behind the authorization gate
#[derive(Debug)]
pub struct Router {
    data: Data,
    commands: Vec<CommandEntry>,
}

impl Router {
    /// Creates a router over the full command table
    pub fn new(config: Arc<Config>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            data: Data { config, runner },
            commands: commands(),
        }
    }

    /// Registered commands, in menu order
    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    /// Looks up a command by name
    pub fn find(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.iter().find(|entry| entry.name == name)
    }

    /// Handles one request and returns the reply text.
    ///
    /// Unauthorized chats only ever get the denial reply; no handler runs.
    #[instrument(skip_all, fields(chat_id = %request.chat_id, command = request.command().unwrap_or("-")))]
    pub async fn dispatch(&self, request: &Request) -> String {
        if !authorize(&self.data.config.access.allowed_chat_ids, request.chat_id) {
            return messages::unauthorized(request.chat_id);
        }

        let ctx = Context {
            data: &self.data,
            request,
        };

        match request.command().and_then(|name| self.find(name)) {
            Some(entry) => {
                info!("Handling command");
                (entry.handler)(ctx).await
            }
            None => {
                debug!("No matching command");
                crate::unknown::unknown(ctx).await
            }
        }
    }
}
