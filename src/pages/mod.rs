//! Pages
//!
//! One component per route. Each page carries its own stylesheet and local
//! UI state; shared chrome lives in `BASE_STYLES`.

mod about;
mod awards;
mod certifications;
mod home;
mod not_found;
mod projects;
mod skills;

pub use about::AboutPage;
pub use awards::AwardsPage;
pub use certifications::CertificationsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;

/// Rules shared by every page: reset, fixed waterfall layer, noise overlay,
/// scroll indicators and the animated page title.
pub const BASE_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=Space+Grotesk:wght@300;400;500;600;700&display=swap');
* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { width: 100%; min-height: 100vh; overflow-x: hidden; background: #0a0a0f; }
.page-root {
  min-height: 100vh; width: 100%; position: relative; overflow-x: hidden; padding-top: 60px;
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background: linear-gradient(135deg, #0a0a0f 0%, #0f172a 35%, #1e1b4b 100%); color: #f8fafc;
}
.waterfall-container {
  position: fixed; top: 0; right: 0; width: 40%; height: 100%;
  pointer-events: none; z-index: 0; opacity: 0.8;
  filter: drop-shadow(0 0 20px rgba(59, 130, 246, 0.5));
}
.waterfall-container.full { width: 100%; opacity: 0.55; }
.noise-overlay {
  position: fixed; inset: 0; pointer-events: none; z-index: 1; opacity: 0.02;
  background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
}
.scroll-progress, .waterfall-flow-indicator {
  position: fixed; top: 60px; left: 0; height: 3px; z-index: 999;
  background: linear-gradient(90deg, #3b82f6, #8b5cf6, #10b981);
  transition: width 0.1s linear;
}
.main-content {
  position: relative; z-index: 10; max-width: 1400px; margin: 0 auto; width: 100%;
  padding: clamp(3rem, 6vw, 6rem) clamp(1.5rem, 5vw, 4rem);
}
.page-header { text-align: center; margin-bottom: clamp(3rem, 6vw, 5rem); animation: fadeDown 0.8s ease both; }
.page-title {
  font-family: 'Space Grotesk', sans-serif; font-size: clamp(2.8rem, 7vw, 5.5rem); font-weight: 800;
  line-height: 1.1; margin-bottom: 1.25rem; color: transparent;
  background: linear-gradient(135deg, #3b82f6, #8b5cf6, #10b981, #3b82f6); background-size: 300% 300%;
  -webkit-background-clip: text; background-clip: text; animation: gradientFlow 8s ease infinite;
}
.page-subtitle { font-size: clamp(1.05rem, 2vw, 1.4rem); color: #94a3b8; max-width: 720px; margin: 0 auto; line-height: 1.6; }
.section-title {
  font-family: 'Space Grotesk', sans-serif; font-size: clamp(1.8rem, 3.5vw, 2.6rem); font-weight: 700;
  margin-bottom: 2rem; color: #e2e8f0;
}
@keyframes gradientFlow { 0%, 100% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } }
@keyframes fadeDown { from { opacity: 0; transform: translateY(-30px); } to { opacity: 1; transform: none; } }
@keyframes fadeUp { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: none; } }
@media (max-width: 768px) { .waterfall-container { width: 100%; opacity: 0.4; } }
"#;
