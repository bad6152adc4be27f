mod login;
mod not_found;
mod register;

pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/webauthn/register") view=RegisterPage />
            <Route path=path!("/webauthn/login") view=LoginPage />
            <Route path=path!("/:domain/webauthn/register") view=RegisterPage />
            <Route path=path!("/:domain/webauthn/login") view=LoginPage />
        </Routes>
    }
}
