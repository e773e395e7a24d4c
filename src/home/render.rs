use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::view::{EpisodeEntry, HomePage, PlayControl};

/// Document title of the homepage
pub const PAGE_TITLE: &str = "Home | podcastr";

const STYLESHEET: &str = "/styles/home.css";
const PLAY_ICON: &str = "/play-green.svg";

/// Render the homepage document.
///
/// The combined episode list is embedded as JSON so the client-side player
/// can resolve each button's `data-play-index`.
pub fn render_home(page: &HomePage<'_>) -> Result<Markup, serde_json::Error> {
    let episode_list = episode_list_json(page)?;

    Ok(html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                div class="homepage" {
                    section class="latestEpisodes" {
                        h2 { "Últimos lançamentos" }
                        ul {
                            @for entry in page.latest() {
                                (latest_card(entry))
                            }
                        }
                    }

                    section class="allEpisodes" {
                        h2 { "Todos episódios" }
                        table cellspacing="0" {
                            thead {
                                tr {
                                    th {}
                                    th { "Podcast" }
                                    th { "Integrantes" }
                                    th { "Data" }
                                    th { "Duração" }
                                    th {}
                                }
                            }
                            tbody {
                                @for entry in page.all() {
                                    (episode_row(entry))
                                }
                            }
                        }
                    }
                }
                script type="application/json" id="episode-list" {
                    (PreEscaped(episode_list))
                }
            }
        }
    })
}

fn latest_card(entry: &EpisodeEntry<'_>) -> Markup {
    let episode = entry.episode;
    html! {
        li data-episode-id=(episode.id()) {
            img src=(episode.thumbnail()) alt=(episode.title()) width="192" height="192" style="object-fit: cover";
            div class="episodeDetails" {
                a href=(episode.href()) { (episode.title()) }
                p { (episode.members()) }
                span { (episode.published_at) }
                span { (episode.duration_as_string) }
            }
            (play_button(entry.play, "Tocar episodio"))
        }
    }
}

fn episode_row(entry: &EpisodeEntry<'_>) -> Markup {
    let episode = entry.episode;
    html! {
        tr data-episode-id=(episode.id()) {
            td style="width: 72px" {
                img src=(episode.thumbnail()) alt=(episode.title()) width="120" height="120" style="object-fit: cover";
            }
            td {
                a href=(episode.href()) { (episode.title()) }
            }
            td { (episode.members()) }
            td style="width: 100px" { (episode.published_at) }
            td { (episode.duration_as_string) }
            td {
                (play_button(entry.play, "Tocar podcast"))
            }
        }
    }
}

fn play_button(play: PlayControl, alt: &str) -> Markup {
    html! {
        button type="button" data-play-index=(play.start_index) {
            img src=(PLAY_ICON) alt=(alt);
        }
    }
}

/// `<` is escaped so episode text can never close the script element
fn episode_list_json(page: &HomePage<'_>) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&page.episode_list())?;
    Ok(json.replace('<', "\\u003c"))
}
