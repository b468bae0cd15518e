// Jumpscare surface timing, gating and overlapping triggers.

mod common;

use common::*;
use curupira_web::core::constants::{MEDIUM_IMAGE, MILD_IMAGE, WILD_IMAGE};
use curupira_web::core::{Cue, Intensity, Site, SiteConfig, Surface};
use std::time::Duration;

fn armed_site() -> (Site<rand::rngs::mock::StepRng>, FakeHost) {
    let mut site = Site::new(SiteConfig::default(), never(), Duration::ZERO);
    let mut host = FakeHost::default();
    site.toggle_sound(&mut host);
    (site, host)
}

#[test]
fn trigger_is_a_no_op_while_sound_is_off() {
    let mut site = Site::new(SiteConfig::default(), always(), Duration::ZERO);
    let mut host = FakeHost::default();
    for intensity in [Intensity::Mild, Intensity::Medium, Intensity::Wild] {
        site.trigger(&mut host, intensity);
    }
    assert!(host.transitions.is_empty());
    assert!(host.cues.is_empty());
    assert!(host.image.is_none());
    assert_eq!(host.pending(), 0);
    assert!(!site.jumpscare().visible);
}

#[test]
fn wild_shows_for_800ms_and_shakes_for_1000ms() {
    let (mut site, mut host) = armed_site();
    site.trigger(&mut host, Intensity::Wild);

    assert!(host.is_visible(Surface::Jumpscare));
    assert!(host.is_visible(Surface::PageShake));
    assert_eq!(host.image.as_deref(), Some(WILD_IMAGE));
    assert_eq!(host.cue_count(Cue::Jumpscare), 1);

    advance(&mut site, &mut host, ms(799));
    assert!(host.is_visible(Surface::Jumpscare));
    advance(&mut site, &mut host, ms(1));
    assert!(!host.is_visible(Surface::Jumpscare));
    assert!(host.is_visible(Surface::PageShake));
    assert!(site.jumpscare().shaking);

    advance(&mut site, &mut host, ms(200));
    assert!(!host.is_visible(Surface::PageShake));
    assert!(!site.jumpscare().shaking);
    assert_eq!(host.changes(Surface::Jumpscare, false), vec![ms(800)]);
    assert_eq!(host.changes(Surface::PageShake, false), vec![ms(1000)]);
}

#[test]
fn medium_shows_for_exactly_400ms_without_shake() {
    let (mut site, mut host) = armed_site();
    site.trigger(&mut host, Intensity::Medium);
    assert_eq!(host.image.as_deref(), Some(MEDIUM_IMAGE));

    advance(&mut site, &mut host, secs(2));
    assert_eq!(host.changes(Surface::Jumpscare, true), vec![Duration::ZERO]);
    assert_eq!(host.changes(Surface::Jumpscare, false), vec![ms(400)]);
    assert!(host.changes(Surface::PageShake, true).is_empty());
}

#[test]
fn unknown_intensity_behaves_like_mild() {
    assert_eq!(Intensity::from_attr("unknown-value"), Intensity::Mild);
    assert_eq!(Intensity::from_attr(""), Intensity::Mild);
    assert_eq!(Intensity::from_attr(" wild "), Intensity::Mild);
    assert_eq!(Intensity::from_attr("Wild"), Intensity::Mild);
    assert_eq!(Intensity::from_attr("wild"), Intensity::Wild);
    assert_eq!(Intensity::from_attr("medium"), Intensity::Medium);

    let (mut a, mut host_a) = armed_site();
    a.click_jumpscare_element(&mut host_a, "unknown-value");
    advance(&mut a, &mut host_a, secs(2));

    let (mut b, mut host_b) = armed_site();
    b.trigger(&mut host_b, Intensity::Mild);
    advance(&mut b, &mut host_b, secs(2));

    assert_eq!(host_a.image.as_deref(), Some(MILD_IMAGE));
    assert_eq!(host_a.transitions, host_b.transitions);
    assert_eq!(host_a.cues, host_b.cues);
}

#[test]
fn overlapping_trigger_extends_the_window() {
    let (mut site, mut host) = armed_site();
    site.trigger(&mut host, Intensity::Mild);
    advance(&mut site, &mut host, ms(300));
    site.trigger(&mut host, Intensity::Mild);
    assert_eq!(site.jumpscare().generation(), 2);

    // the first hide at 400ms is stale and must not cut the second window
    advance(&mut site, &mut host, ms(150));
    assert!(host.is_visible(Surface::Jumpscare));

    advance(&mut site, &mut host, ms(250));
    assert!(!host.is_visible(Surface::Jumpscare));
    assert_eq!(host.changes(Surface::Jumpscare, false), vec![ms(700)]);
}

#[test]
fn mild_after_wild_keeps_the_shake_running() {
    let (mut site, mut host) = armed_site();
    site.trigger(&mut host, Intensity::Wild);
    advance(&mut site, &mut host, ms(100));
    site.trigger(&mut host, Intensity::Mild);

    advance(&mut site, &mut host, ms(400));
    assert!(!host.is_visible(Surface::Jumpscare));
    assert!(host.is_visible(Surface::PageShake));

    advance(&mut site, &mut host, ms(500));
    assert!(!host.is_visible(Surface::PageShake));
}

#[test]
fn easter_egg_is_always_wild() {
    let (mut site, mut host) = armed_site();
    site.click_easter_egg(&mut host);
    assert!(host.is_visible(Surface::PageShake));
    assert_eq!(host.image.as_deref(), Some(WILD_IMAGE));
    assert_eq!(site.jumpscare().triggered, 1);
}
