use super::*;
use crate::core::random::XorShift32;
use crate::domain::theme::{CARD_RAISED_TRANSFORM, CARD_RESTING_TRANSFORM, HEADER_BG_SCROLLED, HEADER_BG_TOP};
use crate::surface::memory::{MemorySurface, NodeId};

struct Site {
    page: PageCore<MemorySurface>,
    header: NodeId,
    nav_link: NodeId,
    dead_link: NodeId,
    cta: NodeId,
    recipes: NodeId,
    cards: Vec<NodeId>,
    buttons: Vec<NodeId>,
}

const CARD_TITLES: [&str; 3] = ["Green Smoothie", "Veggie Scramble", "Mystery Stew"];

fn build_site(with_cta: bool) -> Site {
    let mut s = MemorySurface::new();
    let body = s.body().unwrap();

    let header = s.add(body, "header");
    let nav_link = s.add(header, "a");
    s.set_attribute(nav_link, "href", "#recipes");
    let dead_link = s.add(header, "a");
    s.set_attribute(dead_link, "href", "#nowhere");

    let hero = s.add(body, "section");
    let cta = s.add(hero, "button");
    if with_cta {
        s.set_attribute(cta, "class", "cta-button");
    }

    let recipes = s.add(body, "section");
    s.set_attribute(recipes, "id", "recipes");

    let mut cards = Vec::new();
    let mut buttons = Vec::new();
    for title in CARD_TITLES {
        let card = s.add(recipes, "div");
        s.set_attribute(card, "class", "recipe-card");
        let h3 = s.add(card, "h3");
        s.set_text(&h3, title);
        let button = s.add(card, "button");
        s.set_attribute(button, "class", "recipe-btn");
        s.set_text(&button, "View Recipe");
        cards.push(card);
        buttons.push(button);
    }

    let tips = s.add(body, "section");
    let tip = s.add(tips, "div");
    s.set_attribute(tip, "class", "tip-card");

    let mut page = PageCore::with_settings(s, PageSettings::default(), XorShift32::new(7));
    page.mount().unwrap();

    Site {
        page,
        header,
        nav_link,
        dead_link,
        cta,
        recipes,
        cards,
        buttons,
    }
}

fn click(page: &mut PageCore<MemorySurface>, node: NodeId) {
    let commands = page.surface().click(node);
    page.dispatch_all(commands).unwrap();
}

/// Pump animation frames until nothing is scheduled. Returns frames run.
fn run_frames(page: &mut PageCore<MemorySurface>) -> u32 {
    let mut frames = 0;
    loop {
        let pending = page.surface_mut().take_frames();
        if pending.is_empty() {
            return frames;
        }
        page.dispatch_all(pending).unwrap();
        frames += 1;
        assert!(frames <= 1000, "animation did not settle");
    }
}

fn modal_buttons(page: &PageCore<MemorySurface>, overlay: NodeId) -> Vec<NodeId> {
    let s = page.surface();
    s.query_all("button")
        .into_iter()
        .filter(|b| s.closest(b, ".modal") == Some(overlay))
        .collect()
}

fn text_of(page: &PageCore<MemorySurface>, root: NodeId, selector: &str) -> Option<String> {
    let s = page.surface();
    s.find(&root, selector).and_then(|n| s.text(&n))
}

// === Recipe modal ===

#[test]
fn green_smoothie_modal_renders_and_closes_with_either_control() {
    let mut site = build_site(true);
    let button = site.buttons[0];

    for control in 0..2 {
        click(&mut site.page, button);
        assert_eq!(site.page.active_overlays().len(), 1);
        let overlay = site.page.active_overlays()[0];
        let s = site.page.surface();

        assert!(s.is_attached(&overlay));
        assert_eq!(s.attribute(&overlay, "class").as_deref(), Some("modal"));
        assert_eq!(text_of(&site.page, overlay, "h2").as_deref(), Some("Green Smoothie"));
        assert_eq!(text_of(&site.page, overlay, "span").as_deref(), Some("🥤"));
        assert_eq!(text_of(&site.page, overlay, "p").as_deref(), Some("⏱️ 5 minutes"));

        let ul = s.find(&overlay, "ul").unwrap();
        assert_eq!(s.children(ul).len(), 6);
        assert!(s.children(ul).iter().all(|&li| s.tag(li) == "li"));
        let ol = s.find(&overlay, "ol").unwrap();
        assert_eq!(s.children(ol).len(), 6);

        let controls = modal_buttons(&site.page, overlay);
        assert_eq!(controls.len(), 2);
        click(&mut site.page, controls[control]);

        assert!(!site.page.surface().is_attached(&overlay));
        assert!(site.page.active_overlays().is_empty());
        assert_eq!(site.page.surface().query(".modal"), None);
    }
}

#[test]
fn only_a_backdrop_click_dismisses() {
    let mut site = build_site(true);
    click(&mut site.page, site.buttons[1]);
    let overlay = site.page.active_overlays()[0];

    let title = site.page.surface().find(&overlay, "h2").unwrap();
    let panel = site.page.surface().children(overlay)[0];
    click(&mut site.page, title);
    click(&mut site.page, panel);
    assert!(site.page.surface().is_attached(&overlay));

    click(&mut site.page, overlay);
    assert!(!site.page.surface().is_attached(&overlay));
}

#[test]
fn unknown_card_shows_placeholder() {
    let mut site = build_site(true);
    click(&mut site.page, site.buttons[2]);
    let overlay = site.page.active_overlays()[0];

    assert_eq!(text_of(&site.page, overlay, "h2").as_deref(), Some("Mystery Stew"));
    assert_eq!(text_of(&site.page, overlay, "span").as_deref(), Some("🍽️"));
    assert_eq!(
        text_of(&site.page, overlay, "ul").as_deref(),
        Some("Recipe details coming soon!")
    );
    assert_eq!(
        text_of(&site.page, overlay, "ol").as_deref(),
        Some("Check back later for full instructions!")
    );
}

#[test]
fn opening_a_second_modal_replaces_the_first() {
    let mut site = build_site(true);
    click(&mut site.page, site.buttons[0]);
    let first = site.page.active_overlays()[0];
    click(&mut site.page, site.buttons[1]);

    assert_eq!(site.page.active_overlays().len(), 1);
    assert!(!site.page.surface().is_attached(&first));
    assert_eq!(site.page.surface().query_all(".modal").len(), 1);
}

#[test]
fn overlay_stacking_can_be_enabled() {
    let mut site = build_site(true);
    site.page.set_overlay_stacking(true);
    click(&mut site.page, site.buttons[0]);
    click(&mut site.page, site.buttons[1]);
    assert_eq!(site.page.surface().query_all(".modal").len(), 2);

    site.page.close_overlays();
    assert_eq!(site.page.surface().query_all(".modal").len(), 0);
    assert!(site.page.active_overlays().is_empty());
}

#[test]
fn button_outside_a_card_opens_nothing() {
    let mut site = build_site(true);
    let body = site.page.surface().body().unwrap();
    let stray = site.page.surface_mut().add(body, "button");
    site.page
        .dispatch(PageCommand::OpenRecipeFor { button: stray })
        .unwrap();
    assert!(site.page.active_overlays().is_empty());
}

#[test]
fn open_recipe_by_title() {
    let mut site = build_site(true);
    let overlay = site.page.open_recipe("Black Bean Tacos").unwrap();
    let ul = site.page.surface().find(&overlay, "ul").unwrap();
    assert_eq!(site.page.surface().children(ul).len(), 8);
    site.page.dismiss_overlay(&overlay);
    assert!(site.page.active_overlays().is_empty());
}

#[test]
fn dismissing_a_modal_releases_its_listeners() {
    let mut site = build_site(true);
    let mounted = site.page.surface().listener_count();

    click(&mut site.page, site.buttons[0]);
    let overlay = site.page.active_overlays()[0];
    // Backdrop plus the two dismiss controls
    assert_eq!(site.page.surface().listener_count(), mounted + 3);

    let close_icon = modal_buttons(&site.page, overlay)[0];
    click(&mut site.page, close_icon);
    assert_eq!(site.page.surface().listener_count(), mounted);
    assert!(site.page.surface().click(close_icon).is_empty());

    // Replacing a modal releases the old one's listeners too
    click(&mut site.page, site.buttons[0]);
    click(&mut site.page, site.buttons[1]);
    assert_eq!(site.page.surface().listener_count(), mounted + 3);

    site.page.set_overlay_stacking(true);
    click(&mut site.page, site.buttons[2]);
    assert_eq!(site.page.surface().listener_count(), mounted + 6);
    site.page.close_overlays();
    assert_eq!(site.page.surface().listener_count(), mounted);
}

// === Confetti ===

#[test]
fn cta_scrolls_and_bursts_confetti_until_every_particle_is_gone() {
    let mut site = build_site(true);
    let body = site.page.surface().body().unwrap();
    let before = site.page.surface().children(body).len();

    click(&mut site.page, site.cta);
    assert_eq!(site.page.surface().scrolled_into_view(), &[site.recipes]);
    assert_eq!(site.page.active_bursts(), 1);
    assert_eq!(site.page.active_particles(), 50);
    assert_eq!(site.page.surface().children(body).len(), before + 50);

    let particle = *site.page.surface().children(body).last().unwrap();
    let color = site.page.surface().style(particle, "background").unwrap().to_string();
    assert!(crate::domain::theme::CONFETTI_COLORS.contains(&color.as_str()));

    let frames = run_frames(&mut site.page);
    assert!(frames > 0);
    assert_eq!(site.page.active_particles(), 0);
    assert_eq!(site.page.active_bursts(), 0);
    assert_eq!(site.page.surface().children(body).len(), before);
    assert!(!site.page.surface().is_attached(&particle));
}

#[test]
fn particle_nodes_follow_the_simulation() {
    let mut site = build_site(true);
    site.page.burst().unwrap();
    let pending = site.page.surface_mut().take_frames();
    site.page.dispatch_all(pending).unwrap();

    let body = site.page.surface().body().unwrap();
    let node = *site.page.surface().children(body).last().unwrap();
    let s = site.page.surface();
    assert!(s.style(node, "left").unwrap().starts_with("calc(50% + "));
    assert!(s.style(node, "top").unwrap().starts_with("calc(50% + "));
    let opacity: f64 = s.style(node, "opacity").unwrap().parse().unwrap();
    assert!(opacity > 0.9 && opacity <= 1.0);
    assert_eq!(s.pending_frames(), 1);
}

#[test]
fn concurrent_bursts_run_independently() {
    let mut site = build_site(true);
    let a = site.page.burst().unwrap();
    let b = site.page.burst().unwrap();
    assert_ne!(a, b);
    assert_eq!(site.page.active_particles(), 100);

    run_frames(&mut site.page);
    assert_eq!(site.page.active_bursts(), 0);
    // Stale frame for a finished burst is harmless
    site.page.advance_burst(a).unwrap();
}

#[test]
fn failed_burst_leaves_nothing_behind() {
    let mut site = build_site(true);
    let body = site.page.surface().body().unwrap();
    let before = site.page.surface().children(body).len();

    site.page.surface_mut().fail_styles_after(Some(10));
    assert!(site.page.burst().is_err());
    assert_eq!(site.page.surface().children(body).len(), before);
    assert_eq!(site.page.active_bursts(), 0);
    assert_eq!(site.page.surface().pending_frames(), 0);
}

#[test]
fn styling_failure_keeps_the_burst_running() {
    let mut site = build_site(true);
    let body = site.page.surface().body().unwrap();
    let before = site.page.surface().children(body).len();
    let id = site.page.burst().unwrap();
    site.page.surface_mut().take_frames();

    site.page.surface_mut().fail_styles_after(Some(0));
    assert!(site.page.advance_burst(id).is_err());
    assert_eq!(site.page.active_bursts(), 1);
    assert_eq!(site.page.surface().pending_frames(), 1);

    site.page.surface_mut().fail_styles_after(None);
    run_frames(&mut site.page);
    assert_eq!(site.page.active_bursts(), 0);
    assert_eq!(site.page.surface().children(body).len(), before);
}

#[test]
fn missing_cta_and_section_are_guarded() {
    let mut site = build_site(false);
    click(&mut site.page, site.cta);
    assert_eq!(site.page.active_bursts(), 0);

    let recipes = site.recipes;
    site.page.surface_mut().remove(&recipes);
    site.page.dispatch(PageCommand::ScrollToRecipes).unwrap();
    assert!(site.page.surface().scrolled_into_view().is_empty());
}

// === Ambient effects ===

#[test]
fn anchor_links_scroll_only_to_existing_targets() {
    let mut site = build_site(true);
    click(&mut site.page, site.dead_link);
    assert!(site.page.surface().scrolled_into_view().is_empty());

    click(&mut site.page, site.nav_link);
    assert_eq!(site.page.surface().scrolled_into_view(), &[site.recipes]);
}

#[test]
fn header_restyles_past_threshold() {
    let mut site = build_site(true);
    let commands = site.page.surface_mut().scroll_to(150.0);
    site.page.dispatch_all(commands).unwrap();
    assert_eq!(site.page.surface().style(site.header, "background"), Some(HEADER_BG_SCROLLED));

    let commands = site.page.surface_mut().scroll_to(100.0);
    site.page.dispatch_all(commands).unwrap();
    assert_eq!(site.page.surface().style(site.header, "background"), Some(HEADER_BG_TOP));
}

#[test]
fn cards_lift_on_hover() {
    let mut site = build_site(true);
    let card = site.cards[1];

    let commands = site.page.surface().hover(card, true);
    site.page.dispatch_all(commands).unwrap();
    assert_eq!(site.page.surface().style(card, "transform"), Some(CARD_RAISED_TRANSFORM));

    let commands = site.page.surface().hover(card, false);
    site.page.dispatch_all(commands).unwrap();
    assert_eq!(site.page.surface().style(card, "transform"), Some(CARD_RESTING_TRANSFORM));
}

#[test]
fn cards_start_hidden_and_fade_in() {
    let mut site = build_site(true);
    assert_eq!(site.page.surface().observed().len(), 4);
    assert_eq!(site.page.surface().reveal_options().map(|o| o.threshold), Some(0.1));

    let card = site.cards[0];
    assert_eq!(site.page.surface().style(card, "opacity"), Some("0"));

    let command = site.page.surface().reveal(card).unwrap();
    site.page.dispatch(command).unwrap();
    assert_eq!(site.page.surface().style(card, "opacity"), Some("1"));
    assert_eq!(site.page.surface().style(card, "transform"), Some("translateY(0)"));
}

// === Settings ===

#[test]
fn invalid_settings_are_ignored() {
    let mut site = build_site(true);
    site.page.set_frame_step(0.0);
    site.page.set_frame_step(f64::NAN);
    site.page.set_frame_step(1e-12);
    site.page.set_confetti_gravity(f64::INFINITY);
    site.page.set_confetti_gravity(0.0);
    site.page.set_confetti_gravity(-0.5);
    site.page.set_confetti_gravity(1e-9);
    assert_eq!(site.page.settings().confetti.frame_step, 0.016);
    assert_eq!(site.page.settings().confetti.gravity, 0.5);

    site.page.set_confetti_gravity(1.0);
    site.page.set_header_scroll_threshold(10.0);
    assert_eq!(site.page.settings().confetti.gravity, 1.0);
    assert_eq!(site.page.settings().header_scroll_threshold, 10.0);
}

#[test]
fn slowest_accepted_settings_still_settle() {
    let mut site = build_site(true);
    site.page.set_confetti_gravity(MIN_GRAVITY);
    site.page.set_frame_step(MIN_FRAME_STEP);
    assert_eq!(site.page.settings().confetti.gravity, MIN_GRAVITY);
    assert_eq!(site.page.settings().confetti.frame_step, MIN_FRAME_STEP);

    let id = site.page.burst().unwrap();
    let mut frames = 0;
    while site.page.active_bursts() > 0 {
        site.page.advance_burst(id).unwrap();
        frames += 1;
        assert!(frames <= 20_000, "burst did not settle");
    }
}
