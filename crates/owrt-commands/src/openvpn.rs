//! `/openvpn` command

use crate::framework::{Context, HandlerFuture};
use crate::messages;
use crate::runner::Invocation;

/// netifd status of the `openvpn` interface, falling back to the init script
pub const OPENVPN_STATUS_CMD: &str = "ifstatus openvpn 2>/dev/null || /etc/init.d/openvpn status";

/// Shows the OpenVPN status
pub fn openvpn(ctx: Context<'_>) -> HandlerFuture<'_> {
    Box::pin(async move {
        let output = ctx.run(Invocation::shell(OPENVPN_STATUS_CMD)).await;
        messages::with_header(messages::OPENVPN_HEADER, &output)
    })
}
