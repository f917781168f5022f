//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__column">
                    <h3 class="site-footer__heading">"TECHVISION"</h3>
                    <p>"Skills Academy - Empowering innovation through technology and collaboration."</p>
                </div>
                <div class="site-footer__column">
                    <h3 class="site-footer__heading">"Contact Us"</h3>
                    <ul class="site-footer__contact">
                        <li>"✉ contact@techvision.edu"</li>
                        <li>"☎ +1 (555) 123-4567"</li>
                        <li>"⌂ College Campus, Tech Building"</li>
                    </ul>
                </div>
                <div class="site-footer__column">
                    <h3 class="site-footer__heading">"Follow Us"</h3>
                    <div class="site-footer__social">
                        <a href="#">"Twitter"</a>
                        <a href="#">"LinkedIn"</a>
                        <a href="#">"Instagram"</a>
                    </div>
                </div>
            </div>
            <p class="site-footer__copyright">"© 2026 TechVision Skills Academy. All rights reserved."</p>
        </footer>
    }
}
