/// Main application entry point for the Eduline site.
/// Combines the reference, review and contact sections into the landing page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::contact_form::ContactForm;
use crate::components::references_list::ReferencesSection;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsSection;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/eduline.css"/>
        <Title text="에듀라인 - 기업교육 전문기관"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1>{ "에듀라인" }</h1>
            <p class="tagline">{ "현장이 달라지는 기업교육을 설계합니다" }</p>
        </header>
        <section id="references" class="section">
            <h2>{ "레퍼런스" }</h2>
            <ReferencesSection/>
        </section>
        <section id="reviews" class="section">
            <h2>{ "교육 후기" }</h2>
            <ReviewsSection/>
            <ReviewForm/>
        </section>
        <section id="contact" class="section">
            <h2>{ "교육 문의" }</h2>
            <ContactForm/>
        </section>
    }
}
