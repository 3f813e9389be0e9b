//! `/interfaces` command

use crate::framework::{Context, HandlerFuture};
use crate::runner::Invocation;

/// Sections of the reply: title and the command producing its body
pub const INTERFACES: [(&str, &str); 3] = [
    ("LAN", "ifstatus lan"),
    ("WAN", "ifstatus wan"),
    ("VPN", "ifstatus vpn"),
];

/// Shows netifd status for LAN, WAN and VPN, one after another
pub fn interfaces(ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async move {
        let mut sections = Vec::with_capacity(INTERFACES.len());
        for (title, command) in INTERFACES {
            let output = ctx.run(Invocation::shell(command)).await;
            sections.push(format!("[{title}]\n{output}"));
        }
        sections.join("\n\n")
    })
}
