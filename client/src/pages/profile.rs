//! Personal centre for signed-in non-admin users.

use leptos::prelude::*;

use crate::net::types::User;

#[component]
pub fn ProfilePage(user: User) -> impl IntoView {
    view! {
        <div class="profile">
            <div class="profile__card">
                <h2 class="profile__title">"用户中心"</h2>
                <p class="profile__greeting">"欢迎回来，" <strong>{user.username}</strong></p>
                <p class="profile__email">{user.email}</p>
                <div class="profile__actions">
                    <button class="profile__button" type="button">"编辑资料"</button>
                    <button class="profile__button profile__button--ghost" type="button">"查看收藏"</button>
                </div>
            </div>
        </div>
    }
}
