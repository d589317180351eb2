//! `/apod`: picture of the day for a random date of the past year.

use super::CommandContext;
use crate::i18n::{self, t};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use stargazer_core::{error::StargazerError, message::Reply, space::Apod};
use tracing::{debug, warn};

/// How far back the random date may reach.
const LOOKBACK_DAYS: i64 = 365;

/// Draw a date uniformly from the 365 days before `today`.
///
/// Today itself is excluded: the entry is published on US time and is
/// often missing for users ahead of it.
pub fn random_apod_date<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> NaiveDate {
    let days_back = rng.gen_range(1..=LOOKBACK_DAYS);
    today - Duration::days(days_back)
}

pub(super) async fn handle_apod<R>(
    ctx: &CommandContext<'_>,
    rng: &mut R,
) -> Result<Reply, StargazerError>
where
    R: Rng + Send,
{
    let date = random_apod_date(ctx.today, rng);
    debug!("apod: picked {date}");

    let apod = match ctx.space.apod(date).await {
        Ok(apod) => apod,
        Err(e) => {
            warn!("apod for {date} unavailable: {e}");
            return Ok(Reply::Text(t("apod_unavailable", ctx.lang).to_string()));
        }
    };

    let description = ctx
        .translator
        .translate(&apod.explanation, ctx.lang)
        .await?;

    Ok(format_apod(&apod, &description, ctx.lang))
}

/// Build the reply for an entry whose explanation is already translated.
pub(super) fn format_apod(apod: &Apod, description: &str, lang: &str) -> Reply {
    let caption = i18n::apod_caption(lang, &apod.title, description);
    if apod.is_video() {
        return Reply::Text(i18n::apod_video(lang, &caption, &apod.url));
    }
    Reply::Photo {
        url: apod.url.clone(),
        caption,
    }
}
