// web_app/pages/search.rs - Search page component
//
// Composes the search form and the results area around one search session.
// Genres load on mount; results load only when the form is submitted.

use leptos::prelude::*;

use crate::web_app::client::HttpMarketApi;
use crate::web_app::components::*;
use crate::web_app::hooks::{use_search, UseSearchReturn};
use crate::web_app::search::SearchPhase;

/// Main search page component
#[component]
pub fn SearchPage() -> impl IntoView {
    let search = use_search(HttpMarketApi::same_origin());

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center gap-2">
                    <span class="text-2xl">"🎧"</span>
                    <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-indigo-600 to-fuchsia-600">
                        "Music NFT Market"
                    </h1>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                    <SearchForm search=search />
                </section>

                <section class="w-full min-w-0">
                    <SearchResults search=search />
                </section>
            </main>
        </div>
    }
}

/// Results area: one view per search phase
#[component]
fn SearchResults(search: UseSearchReturn) -> impl IntoView {
    move || match search.phase.get() {
        SearchPhase::Idle => view! {
            <EmptyState
                icon="🔍"
                title="Find your next track"
                hint="Search by keyword, genre or price range"
            />
        }
        .into_any(),
        SearchPhase::Searching => view! {
            <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                <Loading message="Searching NFTs..." />
            </div>
        }
        .into_any(),
        SearchPhase::Failed => view! {
            <ErrorDisplay error=search.error.get().unwrap_or_default() />
        }
        .into_any(),
        SearchPhase::Succeeded if search.results.with(Vec::is_empty) => view! {
            <EmptyState title="No NFTs found" hint="Try another keyword or widen the price range" />
        }
        .into_any(),
        SearchPhase::Succeeded => view! {
            <div class="animate-fade-in">
                <ResultsGrid results=search.results />
            </div>
        }
        .into_any(),
    }
}
