//! Site footer with quick links and contact details.

use leptos::prelude::*;

use crate::components::navbar::category_href;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h4 class="footer__heading">"MedCore 医核心"</h4>
                    <p>"致力于提供最前沿的医学资讯与临床数据服务。"</p>
                </div>
                <div class="footer__column">
                    <h4 class="footer__heading">"快速链接"</h4>
                    <a href=category_href("")>"首页"</a>
                    <a href=category_href("domestic")>"国内资讯"</a>
                    <a href=category_href("international")>"国际视野"</a>
                </div>
                <div class="footer__column">
                    <h4 class="footer__heading">"联系我们"</h4>
                    <p>"✉ contact@medcore.com"</p>
                    <p>"☎ 010-12345678"</p>
                </div>
            </div>
            <div class="footer__copyright">"© 2023 MedCore Medical Systems. All rights reserved."</div>
        </footer>
    }
}
