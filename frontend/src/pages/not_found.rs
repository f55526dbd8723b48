use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" dir="rtl" lang="he" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; background: #0c0f0c; color: #e6e6e6;">
            <h1>{"404"}</h1>
            <p>{"העמוד שחיפשתם אינו קיים."}</p>
            <Link<Route> to={Route::Landing}>{"חזרה לעמוד הבית"}</Link<Route>>
        </div>
    }
}
