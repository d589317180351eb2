use super::CommandContext;
use crate::i18n;
use stargazer_core::message::Reply;

pub(super) fn handle_start(ctx: &CommandContext<'_>) -> Reply {
    Reply::Text(i18n::greeting(ctx.lang, ctx.sender_name))
}
