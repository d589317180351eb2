use super::CommandContext;
use crate::i18n::{self, t};
use rand::Rng;
use stargazer_core::{message::Reply, space::NeoFeed};
use tracing::warn;

pub(super) async fn handle_asteroids<R>(ctx: &CommandContext<'_>, rng: &mut R) -> Reply
where
    R: Rng + Send,
{
    match ctx.space.neo_feed().await {
        Ok(feed) => format_feed(&feed, ctx.lang, rng),
        Err(e) => {
            warn!("neo feed unavailable: {e}");
            Reply::Text(t("asteroids_unavailable", ctx.lang).to_string())
        }
    }
}

/// Render one randomly chosen asteroid, or the fallback text.
pub(super) fn format_feed<R: Rng + ?Sized>(feed: &NeoFeed, lang: &str, rng: &mut R) -> Reply {
    let fallback = || Reply::Text(t("asteroids_unavailable", lang).to_string());

    let Some(asteroid) = feed.pick(rng) else {
        return fallback();
    };
    let Some(approach) = asteroid.approach() else {
        warn!("asteroid {} has no close-approach data", asteroid.name);
        return fallback();
    };

    Reply::Text(i18n::asteroid_summary(
        lang,
        &asteroid.name,
        asteroid.diameter_max_m(),
        &approach.miss_distance.kilometers,
        &approach.relative_velocity.kilometers_per_hour,
    ))
}
