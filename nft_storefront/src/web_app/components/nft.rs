// web_app/components/nft.rs - NFT display components
//
// - NftCard: one listing in the results grid
// - ResultsGrid: grid layout with result count

use leptos::prelude::*;

use crate::web_app::model::MarketItem;

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Card for one marketplace listing
///
/// Fields the backend did not send are simply not rendered.
#[component]
pub fn NftCard(item: MarketItem) -> impl IntoView {
    let name = item.name().unwrap_or_else(|| "Untitled".to_string());
    let price = item.price();
    let genre = item.genre_name();
    let description = item.description_preview(DESCRIPTION_PREVIEW_CHARS);
    let audio = item.audio_url();

    let artwork = match item.image_url() {
        Some(src) => view! {
            <img src=src alt=name.clone() class="h-48 w-full object-cover" loading="lazy" />
        }
        .into_any(),
        None => view! {
            <div class="h-48 bg-gray-100 flex items-center justify-center text-gray-300">
                <span class="text-4xl">"🎵"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                        border border-gray-100 flex flex-col h-full overflow-hidden">
            {artwork}

            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start gap-3 mb-3">
                    <h3 class="font-bold text-gray-900 line-clamp-2 text-lg group-hover:text-indigo-600 transition-colors">
                        {name}
                    </h3>
                    {price.map(|price| view! {
                        <span class="text-sm font-bold text-indigo-600 bg-indigo-50 px-2 py-1 rounded-lg whitespace-nowrap">
                            {price}
                        </span>
                    })}
                </div>

                {description.map(|text| view! {
                    <p class="text-gray-600 text-sm mb-4 line-clamp-3 flex-1">{text}</p>
                })}

                {audio.map(|src| view! {
                    <audio controls=true preload="none" src=src class="w-full mb-3"></audio>
                })}

                {genre.map(|genre| view! {
                    <div class="pt-3 border-t border-gray-100 text-xs">
                        <span class="font-medium bg-gray-100 px-2 py-1 rounded text-gray-600">{genre}</span>
                    </div>
                })}
            </div>
        </article>
    }
}

/// Grid of search results
#[component]
pub fn ResultsGrid(results: Signal<Vec<MarketItem>>) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm text-gray-500 mb-4">
                {move || match results.with(Vec::len) {
                    1 => "1 result".to_string(),
                    n => format!("{} results", n),
                }}
            </p>
            <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-6">
                <For
                    each=move || results.get().into_iter().enumerate()
                    key=|(index, item)| (*index, item.id())
                    children=move |(_, item)| view! { <NftCard item=item /> }
                />
            </div>
        </div>
    }
}
