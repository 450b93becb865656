// web_app/components/common.rs - Reusable UI components
//
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-indigo-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Search unavailable"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Placeholder shown when there is nothing to list
#[component]
pub fn EmptyState(
    #[prop(default = "🎵")]
    icon: &'static str,
    title: &'static str,
    #[prop(default = "")]
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-20 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-6xl mb-4 opacity-50">{icon}</div>
            <h3 class="text-lg font-medium text-gray-900">{title}</h3>
            <p class="text-gray-500 mt-1">{hint}</p>
        </div>
    }
}
