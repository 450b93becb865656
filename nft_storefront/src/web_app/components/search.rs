// web_app/components/search.rs - Search controls
//
// Every control writes through the session setters of `UseSearchReturn`.
// None of them triggers a request; only the form submit does.

use leptos::prelude::*;

use crate::web_app::hooks::UseSearchReturn;
use crate::web_app::model::SortMode;

/// Keyword input plus submit button
#[component]
pub fn KeywordInput(
    search: UseSearchReturn,
    #[prop(default = "Search by title, artist or description...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex gap-3">
            <div class="relative flex-1">
                <input
                    type="text"
                    name="q"
                    class="w-full px-5 py-3 border border-gray-200 rounded-xl bg-gray-50 \
                           focus:bg-white focus:ring-2 focus:ring-indigo-500 focus:border-transparent \
                           text-lg placeholder-gray-400 transition-all"
                    placeholder=placeholder
                    prop:value=move || search.criteria.get().keyword
                    on:input=move |ev| search.set_query.run(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="px-8 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 \
                       transition-all font-semibold shadow-sm disabled:opacity-60 disabled:cursor-wait"
                disabled=move || search.is_loading.get()
            >
                {move || if search.is_loading.get() { "Searching..." } else { "Search" }}
            </button>
        </div>
    }
}

/// Genre dropdown fed by the genre directory
///
/// The empty option means "all genres" and leaves the filter out of the query.
#[component]
pub fn GenreSelect(search: UseSearchReturn) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm">
            <span class="font-semibold text-gray-700">"Genre"</span>
            <select
                name="genre"
                class="px-3 py-2 border border-gray-200 rounded-lg bg-white text-gray-700 \
                       focus:ring-2 focus:ring-indigo-500 cursor-pointer"
                prop:value=move || search.criteria.get().genre_id
                on:change=move |ev| search.set_genre.run(event_target_value(&ev))
            >
                <option value="">"All genres"</option>
                <For
                    each=move || search.genres.get()
                    key=|genre| genre.id.clone()
                    children=move |genre| {
                        view! { <option value=genre.id.clone()>{genre.name.clone()}</option> }
                    }
                />
            </select>
        </label>
    }
}

/// Min/max price inputs
///
/// Values are passed through as typed; the backend owns validation.
#[component]
pub fn PriceRange(search: UseSearchReturn) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1 text-sm">
            <span class="font-semibold text-gray-700">"Price"</span>
            <div class="flex items-center gap-2 bg-white p-1 rounded-lg border border-gray-200">
                <input
                    type="number"
                    name="min_price"
                    placeholder="Min"
                    class="w-24 px-2 py-1.5 border-none rounded text-sm focus:ring-0"
                    prop:value=move || search.criteria.get().min_price
                    on:input=move |ev| search.set_min_price.run(event_target_value(&ev))
                />
                <span class="text-gray-300">"–"</span>
                <input
                    type="number"
                    name="max_price"
                    placeholder="Max"
                    class="w-24 px-2 py-1.5 border-none rounded text-sm focus:ring-0"
                    prop:value=move || search.criteria.get().max_price
                    on:input=move |ev| search.set_max_price.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

/// Sort order dropdown
#[component]
pub fn SortSelect(search: UseSearchReturn) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<SortMode>() {
            Ok(mode) => search.set_sort.run(mode),
            Err(e) => tracing::warn!("Ignoring sort selection: {}", e),
        }
    };

    view! {
        <label class="flex flex-col gap-1 text-sm">
            <span class="font-semibold text-gray-700">"Sort by"</span>
            <select
                name="sort"
                class="px-3 py-2 border border-gray-200 rounded-lg bg-white text-gray-700 \
                       focus:ring-2 focus:ring-indigo-500 cursor-pointer"
                prop:value=move || search.criteria.get().sort.as_param()
                on:change=on_change
            >
                {SortMode::ALL.into_iter().map(|mode| view! {
                    <option value=mode.as_param()>{mode.to_string()}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

/// The whole search form
///
/// Submitting runs one search with the current criteria.
#[component]
pub fn SearchForm(search: UseSearchReturn) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search.search.run(());
    };

    view! {
        <form class="space-y-5" on:submit=on_submit>
            <KeywordInput search=search />
            <div class="flex flex-wrap items-end gap-6">
                <GenreSelect search=search />
                <PriceRange search=search />
                <SortSelect search=search />
            </div>
        </form>
    }
}
