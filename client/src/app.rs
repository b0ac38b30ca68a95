//! Root application component: document shell, session store and routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders [`shell`] on the server; the browser hydrates [`App`].
//! `App` creates the one [`SessionStore`] and starts the startup session
//! check, then hands the store to every component that needs identity.
//!
//! ROUTES
//! ======
//! `/`              listing, optional `?cat=` filter
//! `/article/:id`   article detail
//! `/login`         login form
//! `/register`      two-step registration
//! `/dashboard`     gated: admin console, personal centre, or redirect
//!
//! All routes render inside [`Shell`], which shows the boot screen until the
//! startup check settles and the navbar/footer chrome afterwards.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, spinner::BootScreen};
use crate::pages::{
    article::ArticlePage, dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage,
};
use crate::state::auth::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    session.start();

    view! {
        <Stylesheet id="leptos" href="/pkg/medcore.css"/>
        <Title text="MedCore 医核心"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=StaticSegment("") view=move || view! { <Shell session/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("article"), ParamSegment("id")) view=ArticlePage/>
                    <Route path=StaticSegment("login") view=move || view! { <LoginPage session/> }/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=move || view! { <DashboardPage session/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Page chrome around the routed content.
#[component]
fn Shell(session: SessionStore) -> impl IntoView {
    view! {
        <Show when=move || !session.is_loading() fallback=BootScreen>
            <div class="layout">
                <Navbar session/>
                <main class="layout__main">
                    <Outlet/>
                </main>
                <Footer/>
            </div>
        </Show>
    }
}
