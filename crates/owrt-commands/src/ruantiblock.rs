//! `/rua_status`, `/rua_add` and `/rua_update` commands.
//!
//! The status and update commands are operator-configured shell lines. The
//! add command runs as an argument vector, or as a script taking the domain
//! in `$1` when its template needs a shell, so the user-supplied domain is
//! never parsed as shell code.

use crate::framework::{Context, HandlerFuture};
use crate::messages;
use crate::runner::Invocation;
use tracing::info;

/// Shows the blocklist status
pub fn rua_status(ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async move {
        let command = &ctx.config().ruantiblock.status_cmd;
        let output = ctx.run(Invocation::shell(command.as_str())).await;
        messages::with_header(messages::RUA_STATUS_HEADER, &output)
    })
}

/// Adds the first argument as a domain to the user list
pub fn rua_add(ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async move {
        let Some(domain) = ctx
            .args()
            .first()
            .map(|arg| arg.trim())
            .filter(|arg| !arg.is_empty())
        else {
            return messages::RUA_ADD_USAGE.to_string();
        };

        info!(domain, "Adding domain to ruantiblock list");
        let template = &ctx.config().ruantiblock.add_cmd;
        let invocation = if template.needs_shell() {
            Invocation::script(template.shell_script(), vec![domain.to_string()])
        } else {
            Invocation::argv(template.program(), template.args_for(domain))
        };
        let output = ctx.run(invocation).await;
        messages::with_header(messages::RUA_ADD_HEADER, &output)
    })
}

/// Refreshes the blocklists
pub fn rua_update(ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async move {
        let command = &ctx.config().ruantiblock.update_cmd;
        let output = ctx.run(Invocation::shell(command.as_str())).await;
        messages::with_header(messages::RUA_UPDATE_HEADER, &output)
    })
}
