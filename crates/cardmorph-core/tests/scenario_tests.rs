//! End-to-end interaction scenarios across several cards on one page.

use cardmorph_core::{
    resolve_body, resolve_image, CardHandle, CardOptions, CardRecord, ContentBlock,
    DismissalSource, ImageSurface, KeyInput, MemoryScrollSurface, PageCoordinator,
    SharedScrollSurface, Transition, FALLBACK_BODY,
};

fn three_cards() -> (PageCoordinator, MemoryScrollSurface, Vec<CardHandle>) {
    let surface = MemoryScrollSurface::new();
    let page = PageCoordinator::new(surface.clone());
    let cards = ["One", "Two", "Three"]
        .into_iter()
        .map(|title| page.mount(CardRecord::new(title)).unwrap())
        .collect();
    (page, surface, cards)
}

// ============================================================================
// Multi-card scroll lock
// ============================================================================

#[test]
fn test_three_card_walkthrough() {
    let (page, surface, cards) = three_cards();

    assert!(cards.iter().all(|c| !c.is_open()));
    assert!(!surface.is_locked());

    // Open card 2
    cards[1].open().unwrap();
    assert!(surface.is_locked());
    assert!(!cards[0].is_open());
    assert!(cards[1].is_open());
    assert!(!cards[2].is_open());

    // Escape closes it
    let closed = page.key_down(&KeyInput::Escape);
    assert_eq!(
        closed,
        vec![Transition::Closed {
            card: cards[1].id(),
            source: DismissalSource::Escape
        }]
    );
    assert!(!cards[1].is_open());
    assert!(!surface.is_locked());

    // Open 1 then 3 without closing either
    cards[0].open().unwrap();
    assert!(surface.is_locked());
    cards[2].open().unwrap();
    assert!(surface.is_locked());

    // Closing just one keeps the lock
    cards[0].close(DismissalSource::CloseControl).unwrap();
    assert!(surface.is_locked());
    assert!(cards[2].is_open());

    cards[2].close(DismissalSource::Backdrop).unwrap();
    assert!(!surface.is_locked());
    assert_eq!(surface.history(), vec![true, false, true, false]);
}

#[test]
fn test_two_decks_share_one_document_lock() {
    let document = MemoryScrollSurface::new();
    let shared = SharedScrollSurface::new(document.clone());
    let first = PageCoordinator::new(shared.clone());
    let second = PageCoordinator::new(shared.clone());

    let a = first.mount(CardRecord::new("A")).unwrap();
    let b = second.mount(CardRecord::new("B")).unwrap();

    a.open().unwrap();
    b.open().unwrap();
    a.close(DismissalSource::CloseControl).unwrap();
    assert!(b.is_open());
    assert!(document.is_locked(), "b still needs the document locked");

    b.close(DismissalSource::CloseControl).unwrap();
    assert!(!document.is_locked());
    assert_eq!(document.history(), vec![true, false]);
}

#[test]
fn test_dropping_one_deck_keeps_the_others_lock() {
    let document = MemoryScrollSurface::new();
    let shared = SharedScrollSurface::new(document.clone());
    let survivor = PageCoordinator::new(shared.clone());
    let kept = survivor.mount(CardRecord::new("Kept")).unwrap();
    kept.open().unwrap();

    {
        let doomed = PageCoordinator::new(shared.clone());
        let card = doomed.mount(CardRecord::new("Gone")).unwrap();
        card.open().unwrap();
    }

    assert!(document.is_locked());
    assert_eq!(shared.holders(), 1);
    drop(kept);
    assert!(!document.is_locked());
}

#[test]
fn test_out_of_order_close_keeps_lock_in_sync() {
    let (page, surface, cards) = three_cards();

    cards[0].open().unwrap();
    cards[1].open().unwrap();
    cards[0].close(DismissalSource::Programmatic).unwrap();
    assert!(surface.is_locked());
    assert_eq!(page.open_count(), 1);

    cards[1].close(DismissalSource::Programmatic).unwrap();
    assert!(!surface.is_locked());
}

// ============================================================================
// Dismissal sources
// ============================================================================

#[test]
fn test_escape_on_closed_card_has_no_effect() {
    let (page, surface, cards) = three_cards();

    assert!(page.key_down(&KeyInput::Escape).is_empty());
    assert!(cards.iter().all(|c| !c.is_open()));
    assert!(surface.history().is_empty());
}

#[test]
fn test_escape_closes_every_open_card() {
    let (page, surface, cards) = three_cards();
    cards[0].open().unwrap();
    cards[2].open().unwrap();

    let closed = page.key_down(&KeyInput::Escape);
    assert_eq!(closed.len(), 2);
    assert!(!surface.is_locked());
    assert_eq!(page.listener_count(), 0);
}

#[test]
fn test_other_keys_do_not_dismiss() {
    let (page, _, cards) = three_cards();
    cards[0].open().unwrap();

    assert!(page.key_down(&KeyInput::from_dom_key("Enter")).is_empty());
    assert!(cards[0].is_open());
}

#[test]
fn test_pointer_inside_overlay_keeps_card_open() {
    let (page, _, cards) = three_cards();
    cards[0].open().unwrap();
    let anchor = cards[0].anchor().unwrap();

    let tick = page.next_tick();
    assert!(page.pointer_down(tick, &[anchor]).is_empty());
    assert!(cards[0].is_open());
}

#[test]
fn test_pointer_outside_overlay_closes_card() {
    let (page, surface, cards) = three_cards();
    cards[0].open().unwrap();

    let tick = page.next_tick();
    let closed = page.pointer_down(tick, &[]);
    assert_eq!(
        closed,
        vec![Transition::Closed {
            card: cards[0].id(),
            source: DismissalSource::OutsidePointer
        }]
    );
    assert!(!surface.is_locked());
}

#[test]
fn test_activating_pointer_does_not_close() {
    let (page, _, cards) = three_cards();

    // The press on the tile is stamped before the tile activates
    let press = page.next_tick();
    cards[1].open().unwrap();

    // A listener seeing that same press must not dismiss
    assert!(page.pointer_down(press, &[]).is_empty());
    assert!(cards[1].is_open());

    // The next press outside does
    let next = page.next_tick();
    assert_eq!(page.pointer_down(next, &[]).len(), 1);
    assert!(!cards[1].is_open());
}

#[test]
fn test_backdrop_press_is_attributed_to_backdrop() {
    let (page, surface, cards) = three_cards();
    cards[2].open().unwrap();

    // The backdrop handles its own press before it bubbles to the deck root
    let tick = page.next_tick();
    assert_eq!(
        page.backdrop_click(&cards[2].id()).unwrap(),
        Some(Transition::Closed {
            card: cards[2].id(),
            source: DismissalSource::Backdrop
        })
    );
    assert!(page.pointer_down(tick, &[]).is_empty());
    assert!(!surface.is_locked());
}

#[test]
fn test_pointer_inside_one_overlay_closes_the_other() {
    let (page, _, cards) = three_cards();
    cards[0].open().unwrap();
    cards[1].open().unwrap();
    let first = cards[0].anchor().unwrap();

    let tick = page.next_tick();
    let closed = page.pointer_down(tick, &[first]);
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].card(), cards[1].id());
    assert!(cards[0].is_open());
}

// ============================================================================
// Unmount
// ============================================================================

#[test]
fn test_unmount_while_open_leaves_no_listeners() {
    let (page, surface, mut cards) = three_cards();
    cards[0].open().unwrap();
    cards[1].open().unwrap();
    assert_eq!(page.listener_count(), 4);

    drop(cards.remove(0));
    assert_eq!(page.listener_count(), 2);
    assert!(surface.is_locked(), "card two is still open");

    drop(cards.remove(0));
    assert_eq!(page.listener_count(), 0);
    assert!(!surface.is_locked());
}

#[test]
fn test_dropping_page_restores_scroll() {
    let surface = MemoryScrollSurface::new();
    let page = PageCoordinator::new(surface.clone());
    let card = page.mount(CardRecord::new("A")).unwrap();
    card.open().unwrap();

    drop(page);
    drop(card);
    assert!(!surface.is_locked());
}

// ============================================================================
// Content fallbacks
// ============================================================================

#[test]
fn test_bare_record_renders_placeholder_and_fallback() {
    let page = PageCoordinator::headless();
    let record = CardRecord::new("Bare");
    let card = page.mount(record.clone()).unwrap();
    card.open().unwrap();

    let options = CardOptions::default();
    assert!(matches!(
        resolve_image(&record, options.image_fallback),
        ImageSurface::Placeholder { .. }
    ));
    assert_eq!(
        resolve_body(&record).blocks,
        vec![ContentBlock::Paragraph(FALLBACK_BODY.to_string())]
    );
}
