//! `/clients` command

use crate::framework::{Context, HandlerFuture};
use crate::messages;
use crate::runner::Invocation;

/// dnsmasq lease file on OpenWrt
pub const LEASES_CMD: &str = "cat /tmp/dhcp.leases";

/// Shows the current DHCP leases
pub fn clients(ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async move {
        let output = ctx.run(Invocation::shell(LEASES_CMD)).await;
        messages::with_header(messages::CLIENTS_HEADER, &output)
    })
}
