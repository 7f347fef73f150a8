use dioxus::prelude::*;

use super::client::QueryClient;

/// Exposes one query client to every descendant.
///
/// The client is captured on first render only; later renders never
/// replace it.
#[component]
pub fn QueryClientProvider(client: QueryClient, children: Element) -> Element {
    use_context_provider(|| client);

    children
}
