use crate::components::feature_card::FeatureCard;
use crate::components::icons::AppleIcon;
use crate::components::media_slider::MediaSlider;
use crate::config::{demo_video_url, DOWNLOAD_PATH};
use crate::motion::hooks::{use_in_view, use_parallax};
use crate::utils::dom::jump_to_top;
use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

pub const SLIDER_PHOTOS: &[&str] = &[
    "/slide1.jpg",
    "/slide2.png",
    "/slide3.png",
    "/slide4.jpg",
    "/slide5.png",
    "/slide6.jpg",
    "/slide7.png",
];

const WAVEFORM_BARS: usize = 30;

/// Keyframe peaks for one waveform bar, spread so neighbours never move in lockstep.
fn waveform_bar_style(i: usize) -> String {
    let low = 10 + (i * 7) % 15;
    let high = 20 + (i * 37) % 80;
    let duration = 0.8 + ((i * 13) % 50) as f64 / 100.0;
    format!(
        "--low: {}%; --high: {}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        low,
        high,
        duration,
        i as f64 * 0.05
    )
}

#[function_component(Hero)]
fn hero() -> Html {
    let parallax = use_parallax();

    html! {
        <section class="hero-section">
            <div class="hero-glows">
                <div class="hero-glow-wide"></div>
                <div class="hero-glow-top"></div>
            </div>
            <div class="hero-noise"></div>

            <div class="hero-copy" style={parallax.style()}>
                <h1 class="hero-headline fade-up" style="animation-delay: 0.1s;">
                    <span class="headline-main">{"The Notch."}</span>
                    <span class="headline-sub">{"Now on Windows."}</span>
                </h1>
                <p class="hero-lede fade-up" style="animation-delay: 0.2s;">
                    {"A seamless Dynamic Island experience for your desktop. Media controls, system stats, notifications — all in one elegant space."}
                </p>
                <div class="hero-actions fade-up" style="animation-delay: 0.3s;">
                    <a href={DOWNLOAD_PATH} download="" class="cta-primary">
                        <AppleIcon />
                        {"Download Free"}
                        <i class="fas fa-arrow-right cta-arrow"></i>
                    </a>
                    <Link<Route> to={Route::LearnMore}>
                        <button class="cta-secondary">{"Learn More"}</button>
                    </Link<Route>>
                </div>
                <p class="hero-fineprint fade-in" style="animation-delay: 0.6s;">
                    {"Compatible with Windows 10 & 11 · Free forever"}
                </p>
            </div>

            <div class="hero-media fade-up" style="animation-delay: 0.5s;">
                <div class="media-row">
                    <div class="media-video">
                        <iframe
                            src={demo_video_url()}
                            title="YouTube video player"
                            frameborder="0"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                    <MediaSlider slides={SLIDER_PHOTOS} />
                </div>
            </div>

            <div class="hero-fade"></div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    let header = use_node_ref();
    let header_in_view = use_in_view(header.clone());

    html! {
        <section class="features-section">
            <div class="features-ambience"></div>
            <div class="features-inner">
                <div ref={header} class={classes!("features-header", "reveal-on-view", header_in_view.then_some("in-view"))}>
                    <h2>
                        {"Transform Your "}<br />
                        <span class="gradient-text">{"Windows to Mac"}</span>
                    </h2>
                    <p>{"A powerful suite of features hidden right at the top of your screen. Everything feels natural, smooth, and just pure awesomeness!"}</p>
                </div>

                <div class="bento-grid">
                    <FeatureCard class={classes!("span-large")} delay={0.1}>
                        <div class="card-heading-large">
                            <div class="card-icon icon-lg tint-indigo"><i class="fas fa-music"></i></div>
                            <h3>{"Cool Music Controls ✨"}</h3>
                            <p>{"Your favorite tunes at your fingertips! Watch album covers blend beautifully with magical color effects in your notch. Skip, play, and groove with style! 🎸"}</p>
                        </div>
                        <div class="player-preview">
                            <div class="album-art"><i class="fas fa-music"></i></div>
                            <div class="track-info">
                                <h4>{"Midnight City"}</h4>
                                <p>{"M83 · Hurry Up, We're Dreaming"}</p>
                                <div class="waveform">
                                    { for (0..WAVEFORM_BARS).map(|i| html! {
                                        <div class="wave-bar" key={i} style={waveform_bar_style(i)}></div>
                                    }) }
                                </div>
                            </div>
                            <div class="player-controls">
                                <i class="fas fa-backward-step"></i>
                                <div class="play-button"><i class="fas fa-play"></i></div>
                                <i class="fas fa-forward-step"></i>
                            </div>
                        </div>
                    </FeatureCard>

                    <FeatureCard class={classes!("span-small")} delay={0.2}>
                        <div class="card-heading">
                            <div class="card-icon tint-rose"><i class="fas fa-calendar"></i></div>
                            <h3>{"Never Miss a Meeting 📆"}</h3>
                        </div>
                        <p class="card-text">{"All your important dates and meetings pop up right in your notch - super easy to see what’s coming up next!"}</p>
                        <div class="agenda">
                            <div class="agenda-item current">
                                <div class="agenda-marker"></div>
                                <div>
                                    <p class="agenda-title">{"Team Sync"}</p>
                                    <p class="agenda-time">{"10:00 AM · Zoom"}</p>
                                </div>
                            </div>
                            <div class="agenda-item">
                                <div class="agenda-marker"></div>
                                <div>
                                    <p class="agenda-title">{"Design Review"}</p>
                                    <p class="agenda-time">{"1:30 PM · Meet"}</p>
                                </div>
                            </div>
                        </div>
                    </FeatureCard>

                    <FeatureCard class={classes!("span-small")} delay={0.3}>
                        <div class="card-heading">
                            <div class="card-icon tint-emerald"><i class="fas fa-video"></i></div>
                            <h3>{"Look Your Best! 🤳"}</h3>
                        </div>
                        <p class="card-text">{"Quick camera check before your Zoom call? We’ve got you covered! Just like a tiny mirror in your notch 💫"}</p>
                        <div class="mirror-preview">
                            <div class="live-dot"></div>
                            <i class="fas fa-video"></i>
                        </div>
                    </FeatureCard>

                    <FeatureCard class={classes!("span-small")} delay={0.4}>
                        <div class="card-heading">
                            <div class="card-icon tint-yellow"><i class="fas fa-battery-three-quarters"></i></div>
                            <h3>{"Power Buddy 🔋"}</h3>
                        </div>
                        <p class="card-text">{"See how much juice your MacBook has left with pretty battery indicators. No more surprise shutdowns! ⚡"}</p>
                        <div class="battery-preview">
                            <div class="battery-shell">
                                <div class="battery-level"></div>
                                <div class="battery-cap"></div>
                            </div>
                        </div>
                    </FeatureCard>

                    <FeatureCard class={classes!("span-small")} delay={0.5}>
                        <div class="card-heading">
                            <div class="card-icon tint-cyan"><i class="fas fa-file-arrow-up"></i></div>
                            <h3>{"Share Files Like a Pro! 🚀"}</h3>
                        </div>
                        <p class="card-text">{"Drop files right into your notch for super-quick sharing! Drag, drop, done! 📱"}</p>
                        <div class="drop-zone">
                            <div class="drop-hint">
                                <i class="fas fa-file-arrow-up"></i>
                                <span>{"Drag & Drop"}</span>
                            </div>
                        </div>
                    </FeatureCard>

                    <FeatureCard class={classes!("span-small")} delay={0.6}>
                        <div class="card-heading">
                            <div class="card-icon tint-gray"><i class="fas fa-sliders"></i></div>
                            <h3>{"Redesigned HUD 🛠️"}</h3>
                        </div>
                        <p class="card-text">{"Replace the standard macOS brightness/volume HUDs with beautiful sliders that blend seamlessly into the notch."}</p>
                        <div class="hud-preview">
                            <div class="hud-slider">
                                <i class="fas fa-sun"></i>
                                <div class="hud-track"><div class="hud-fill" style="width: 70%;"></div></div>
                            </div>
                            <div class="hud-slider">
                                <i class="fas fa-volume-high"></i>
                                <div class="hud-track"><div class="hud-fill" style="width: 40%;"></div></div>
                            </div>
                        </div>
                    </FeatureCard>

                    <FeatureCard class={classes!("span-wide")} delay={0.7}>
                        <div class="card-heading">
                            <div class="card-icon tint-fuchsia"><i class="fas fa-palette"></i></div>
                            <h3>{"Pretty & Smart Design 🎨"}</h3>
                        </div>
                        <div class="card-split">
                            <p class="card-text">{"Watch your notch come alive with beautiful colors that match your music! Smooth animations and cool blurry effects make everything look amazing! ✨"}</p>
                            <div class="orb-preview">
                                <div class="orb-glow"></div>
                                <div class="orb-glass"></div>
                            </div>
                        </div>
                    </FeatureCard>

                    <FeatureCard class={classes!("span-wide")} delay={0.8}>
                        <div class="card-heading">
                            <div class="card-icon tint-violet"><i class="fas fa-wand-magic-sparkles"></i></div>
                            <h3>{"Works Like Magic! 🪄"}</h3>
                        </div>
                        <div class="card-split">
                            <p class="card-text">{"Everything feels natural and smooth - just like it came with your Mac! No complicated stuff, just pure awesomeness!"}</p>
                            <div class="spark-preview">
                                <div class="spark"></div>
                                <div class="spark-sheen"></div>
                            </div>
                        </div>
                    </FeatureCard>
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                jump_to_top();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Hero />
            <Features />
            <style>
                {r#"
    .hero-section {
        position: relative;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding-top: 10rem;
        overflow: hidden;
        background: #050507;
    }
    .hero-glows {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }
    .hero-glow-wide {
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        width: 900px;
        height: 900px;
        border-radius: 50%;
        opacity: 0.8;
        background: radial-gradient(ellipse at center, #1a1a2e 0%, transparent 70%);
    }
    .hero-glow-top {
        position: absolute;
        top: 20%;
        left: 50%;
        transform: translateX(-50%);
        width: 600px;
        height: 300px;
        border-radius: 50%;
        background: radial-gradient(ellipse at center, rgba(99, 102, 241, 0.08) 0%, transparent 70%);
    }
    .hero-noise {
        position: absolute;
        inset: 0;
        opacity: 0.03;
        pointer-events: none;
        background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noise'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noise)'/%3E%3C/svg%3E");
    }
    .hero-copy {
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 0 1.5rem;
        text-align: center;
        will-change: transform, opacity;
    }
    .hero-headline {
        font-family: 'SF Pro Display', -apple-system, 'Helvetica Neue', sans-serif;
        font-weight: 700;
        letter-spacing: -0.04em;
        line-height: 0.95;
        margin-bottom: 1.5rem;
    }
    .headline-main {
        display: block;
        font-size: clamp(64px, 12vw, 130px);
        color: #fff;
    }
    .headline-sub {
        display: block;
        margin-top: 0.25rem;
        font-size: clamp(40px, 8vw, 90px);
        font-weight: 600;
        color: rgba(255, 255, 255, 0.3);
    }
    .hero-lede {
        max-width: 520px;
        margin-bottom: 3.5rem;
        font-size: 19px;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.4);
    }
    .hero-actions {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .hero-actions a {
        text-decoration: none;
    }
    .cta-primary {
        display: flex;
        align-items: center;
        gap: 0.625rem;
        padding: 0.75rem 1.75rem;
        border-radius: 9999px;
        background: #fff;
        color: #000;
        font-size: 15px;
        font-weight: 600;
        transition: all 0.2s;
    }
    .cta-primary:hover {
        background: rgba(255, 255, 255, 0.9);
        transform: scale(1.02);
    }
    .cta-primary .apple-icon {
        width: 14px;
        height: 14px;
    }
    .cta-arrow {
        font-size: 0.8rem;
        opacity: 0;
        margin-left: -0.5rem;
        transition: all 0.2s;
    }
    .cta-primary:hover .cta-arrow {
        opacity: 1;
        margin-left: 0;
    }
    .cta-secondary {
        padding: 0.75rem 1.75rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: transparent;
        color: rgba(255, 255, 255, 0.6);
        font-size: 15px;
        font-weight: 500;
        cursor: pointer;
        transition: all 0.2s;
    }
    .cta-secondary:hover {
        border-color: rgba(255, 255, 255, 0.2);
        color: rgba(255, 255, 255, 0.8);
        transform: scale(1.02);
    }
    .hero-fineprint {
        margin-top: 1.25rem;
        font-size: 12px;
        color: rgba(255, 255, 255, 0.2);
    }
    .hero-media {
        position: relative;
        z-index: 10;
        width: 100%;
        max-width: 85rem;
        margin-top: 5rem;
        padding: 0 1.5rem;
    }
    .media-row {
        display: flex;
        gap: 1.5rem;
        height: 600px;
    }
    .media-video {
        position: relative;
        z-index: 10;
        width: 35%;
        height: 100%;
        overflow: hidden;
        border-radius: 30px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        box-shadow: 0 0 50px rgba(0, 0, 0, 0.6);
        background: #0a0a0f;
    }
    .media-video iframe {
        width: 100%;
        height: 100%;
        opacity: 0.9;
        pointer-events: none;
        transform: scale(1.35);
    }
    .hero-fade {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 0;
        z-index: 20;
        height: 12rem;
        pointer-events: none;
        background: linear-gradient(to top, #050507, transparent);
    }
    .features-section {
        position: relative;
        padding: 8rem 0;
        overflow: hidden;
        background: #050507;
    }
    .features-ambience {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 1000px;
        height: 400px;
        border-radius: 50%;
        background: rgba(79, 70, 229, 0.1);
        filter: blur(120px);
        pointer-events: none;
    }
    .features-inner {
        max-width: 85rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .features-header {
        max-width: 48rem;
        margin: 0 auto 6rem;
        text-align: center;
    }
    .features-header h2 {
        margin-bottom: 1.5rem;
        font-family: 'Syne', sans-serif;
        font-size: 3rem;
        font-weight: 700;
        letter-spacing: -0.02em;
        color: #fff;
    }
    .features-header p {
        max-width: 42rem;
        margin: 0 auto;
        font-size: 1.125rem;
        line-height: 1.7;
        color: rgba(255, 255, 255, 0.5);
    }
    .gradient-text {
        background: linear-gradient(90deg, #a5b4fc, rgba(255, 255, 255, 0.9), #67e8f9);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .bento-grid {
        display: grid;
        grid-template-columns: repeat(6, 1fr);
        grid-auto-rows: minmax(220px, auto);
        gap: 1.5rem;
    }
    .span-large { grid-column: span 4; grid-row: span 2; }
    .span-small { grid-column: span 2; }
    .span-wide { grid-column: span 3; }
    .feature-card {
        position: relative;
        overflow: hidden;
        padding: 2rem;
        border-radius: 32px;
        border: 1px solid rgba(255, 255, 255, 0.08);
        background: #0A0A0F;
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94), transform 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94);
    }
    .feature-card.in-view {
        opacity: 1;
        transform: translateY(0);
    }
    .card-spotlight, .card-glow {
        position: absolute;
        inset: 0;
        pointer-events: none;
        transition: opacity 0.5s;
    }
    .card-glow {
        opacity: 0;
    }
    .feature-card:hover .card-glow {
        opacity: 1;
    }
    .card-body {
        position: relative;
        z-index: 10;
        display: flex;
        flex-direction: column;
        height: 100%;
    }
    .card-heading {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
    }
    .card-heading h3 {
        font-size: 1.125rem;
        font-weight: 700;
        color: #fff;
    }
    .card-heading-large {
        margin-bottom: 2rem;
    }
    .card-heading-large h3 {
        margin-bottom: 0.5rem;
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
    }
    .card-heading-large p {
        max-width: 28rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.5);
    }
    .card-icon {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.75rem;
    }
    .card-icon.icon-lg {
        width: 3rem;
        height: 3rem;
        margin-bottom: 1rem;
        border-radius: 1rem;
        font-size: 1.25rem;
    }
    .tint-indigo { background: rgba(99, 102, 241, 0.2); color: #a5b4fc; }
    .tint-rose { background: rgba(244, 63, 94, 0.2); color: #fda4af; }
    .tint-emerald { background: rgba(16, 185, 129, 0.2); color: #6ee7b7; }
    .tint-yellow { background: rgba(234, 179, 8, 0.2); color: #fde047; }
    .tint-cyan { background: rgba(6, 182, 212, 0.2); color: #67e8f9; }
    .tint-gray { background: rgba(107, 114, 128, 0.2); color: #d1d5db; }
    .tint-fuchsia { background: rgba(217, 70, 239, 0.2); color: #f0abfc; }
    .tint-violet { background: rgba(139, 92, 246, 0.2); color: #c4b5fd; }
    .card-text {
        margin-bottom: 1.5rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.5);
    }
    .player-preview {
        display: flex;
        align-items: center;
        gap: 1.25rem;
        margin-top: auto;
        padding: 1.25rem;
        border-radius: 24px;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.03);
        backdrop-filter: blur(12px);
    }
    .album-art {
        display: flex;
        align-items: center;
        justify-content: center;
        flex-shrink: 0;
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        background: linear-gradient(135deg, #6366f1, #9333ea);
        color: rgba(255, 255, 255, 0.8);
        font-size: 1.25rem;
    }
    .track-info {
        flex: 1;
        min-width: 0;
    }
    .track-info h4 {
        font-weight: 600;
        color: #fff;
    }
    .track-info p {
        margin-bottom: 0.75rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.4);
    }
    .waveform {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        height: 2rem;
        overflow: hidden;
    }
    .wave-bar {
        width: 0.25rem;
        height: var(--low);
        border-radius: 9999px;
        background: rgba(129, 140, 248, 0.8);
        animation-name: wave;
        animation-timing-function: ease-in-out;
        animation-iteration-count: infinite;
    }
    @keyframes wave {
        0%, 100% { height: var(--low); }
        50% { height: var(--high); }
    }
    .player-controls {
        display: flex;
        align-items: center;
        gap: 1rem;
        flex-shrink: 0;
        color: #fff;
    }
    .play-button {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: #fff;
        color: #000;
        box-shadow: 0 10px 15px rgba(255, 255, 255, 0.2);
        cursor: pointer;
        transition: transform 0.2s;
    }
    .play-button:hover {
        transform: scale(1.05);
    }
    .agenda {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        margin-top: auto;
    }
    .agenda-item {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 0.75rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.02);
        opacity: 0.5;
    }
    .agenda-item.current {
        border-color: rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.1);
        opacity: 1;
    }
    .agenda-marker {
        width: 0.25rem;
        height: 2rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.2);
    }
    .agenda-item.current .agenda-marker {
        background: #fb7185;
    }
    .agenda-title {
        font-size: 0.875rem;
        font-weight: 500;
        color: #fff;
    }
    .agenda-time {
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.4);
    }
    .mirror-preview, .drop-zone {
        position: relative;
        flex: 1;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 1rem;
    }
    .mirror-preview {
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.2);
        font-size: 2rem;
    }
    .live-dot {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #34d399;
        box-shadow: 0 0 8px #34d399;
        animation: pulse 2s ease-in-out infinite;
    }
    .battery-preview {
        flex: 1;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .battery-shell {
        position: relative;
        width: 8rem;
        height: 3rem;
        padding: 0.375rem;
        border: 2px solid rgba(255, 255, 255, 0.2);
        border-radius: 0.75rem;
    }
    .battery-level {
        width: 20%;
        height: 100%;
        border-radius: 0.5rem;
        background: linear-gradient(90deg, #facc15, #4ade80);
        transition: width 1.5s ease-out 0.5s;
    }
    .feature-card.in-view .battery-level {
        width: 85%;
    }
    .battery-cap {
        position: absolute;
        right: -6px;
        top: 50%;
        transform: translateY(-50%);
        width: 0.375rem;
        height: 1rem;
        border-radius: 0 2px 2px 0;
        background: rgba(255, 255, 255, 0.2);
    }
    .drop-zone {
        border: 2px dashed rgba(6, 182, 212, 0.3);
        background: rgba(6, 182, 212, 0.05);
    }
    .drop-hint {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        color: #22d3ee;
        font-size: 0.75rem;
        font-weight: 600;
        letter-spacing: 0.05em;
        text-transform: uppercase;
        animation: bob 2s ease-in-out infinite;
    }
    .drop-hint i {
        font-size: 2rem;
    }
    @keyframes bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-5px); }
    }
    .hud-preview {
        flex: 1;
        display: flex;
        flex-direction: column;
        justify-content: center;
        gap: 1rem;
    }
    .hud-slider {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0.625rem 0.625rem 0.625rem 1rem;
        border-radius: 9999px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.7);
    }
    .hud-track {
        flex: 1;
        height: 0.375rem;
        overflow: hidden;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.1);
    }
    .hud-fill {
        height: 100%;
        border-radius: 9999px;
        background: #fff;
    }
    .card-split {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .card-split .card-text {
        flex: 1;
        margin-bottom: 0;
    }
    .orb-preview {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        flex-shrink: 0;
        width: 6rem;
        height: 6rem;
    }
    .orb-glow {
        position: absolute;
        inset: 0;
        border-radius: 9999px;
        opacity: 0.6;
        filter: blur(24px);
        background: linear-gradient(45deg, #d946ef, #06b6d4);
        animation: orbit 8s linear infinite;
    }
    .orb-glass {
        position: relative;
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(0, 0, 0, 0.4);
        backdrop-filter: blur(24px);
    }
    @keyframes orbit {
        0% { transform: rotate(0deg) scale(1); }
        50% { transform: rotate(180deg) scale(1.1); }
        100% { transform: rotate(360deg) scale(1); }
    }
    .spark-preview {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        flex-shrink: 0;
        width: 8rem;
        height: 4rem;
        overflow: hidden;
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: rgba(255, 255, 255, 0.05);
    }
    .spark {
        position: absolute;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #fff;
        box-shadow: 0 0 15px #fff;
        animation: sweep 3s ease-in-out infinite;
    }
    .spark-sheen {
        position: absolute;
        inset: 0;
        filter: blur(4px);
        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
    }
    @keyframes sweep {
        0%, 100% { transform: translateX(-40px); }
        50% { transform: translateX(40px); }
    }
    @media (max-width: 1024px) {
        .media-row {
            flex-direction: column;
            height: auto;
        }
        .media-video {
            width: 100%;
            height: 500px;
        }
        .span-large, .span-small, .span-wide {
            grid-column: span 3;
        }
        .span-large {
            grid-column: span 6;
        }
    }
    @media (max-width: 768px) {
        .hero-actions, .card-split {
            flex-direction: column;
        }
        .span-large, .span-small, .span-wide {
            grid-column: span 6;
        }
    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_has_seven_slides() {
        assert_eq!(SLIDER_PHOTOS.len(), 7);
    }

    #[test]
    fn waveform_peaks_stay_within_bar_height() {
        for i in 0..WAVEFORM_BARS {
            let style = waveform_bar_style(i);
            let high: usize = style
                .split("--high: ")
                .nth(1)
                .and_then(|rest| rest.split('%').next())
                .and_then(|value| value.parse().ok())
                .unwrap();
            assert!((20..100).contains(&high), "bar {i} peaks at {high}%");
        }
    }
}
