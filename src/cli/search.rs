use crate::{
    cli::host::{finish_redirect, open_session},
    config::Config,
    error, info, spotify, utils,
};

/// One-shot catalog search that prints the results as a table.
///
/// Without a token the browser is sent to the authorization page first; the
/// search then runs again once the redirect arrives.
///
/// # Arguments
///
/// * `term` - Search phrase, e.g. an artist or a song title
///
/// # Example
///
/// ```text
/// $ musetunes search daft punk
/// ```
pub async fn search(term: String) {
    let (session, window) = match open_session(Config::from_env()).await {
        Ok(opened) => opened,
        Err(e) => error!("Cannot start session. Err: {}", e),
    };

    let pb = utils::spinner("Searching... Please wait or login if redirected.");
    let mut tracks = spotify::search::search(&session, &term).await;
    pb.finish_and_clear();

    if let Some(resumed) = finish_redirect(&session, &window).await {
        tracks = resumed;
    }

    if tracks.is_empty() {
        info!("No tracks found for \"{}\"", term);
        return;
    }

    println!("{}", utils::track_table(&tracks));
}
