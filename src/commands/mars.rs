use super::CommandContext;
use crate::i18n::t;
use rand::Rng;
use stargazer_core::{message::Reply, space::MarsPhotos};
use tracing::warn;

pub(super) async fn handle_mars<R>(ctx: &CommandContext<'_>, rng: &mut R) -> Reply
where
    R: Rng + Send,
{
    match ctx.space.mars_photos().await {
        Ok(photos) => format_photos(&photos, ctx.lang, rng),
        Err(e) => {
            warn!("mars photos unavailable: {e}");
            Reply::Text(t("mars_unavailable", ctx.lang).to_string())
        }
    }
}

pub(super) fn format_photos<R: Rng + ?Sized>(photos: &MarsPhotos, lang: &str, rng: &mut R) -> Reply {
    match photos.pick(rng) {
        Some(photo) => Reply::Photo {
            url: photo.img_src.clone(),
            caption: t("mars_caption", lang).to_string(),
        },
        None => Reply::Text(t("mars_unavailable", lang).to_string()),
    }
}
