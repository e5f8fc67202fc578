//! End-to-end contract scenarios: a minimal fake engine drives the record
//! the way the real editor view would.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vellum_editor::{BlockRenderMap, BlockRenderer, ConfigError, EditorConfig, Handled};
use vellum_editor_core::{
    BlockType, ContentBlock, EditorCommand, EditorState, Key, KeyEvent, SelectionState,
};

fn story_state() -> EditorState {
    EditorState::new(vec![
        ContentBlock::new("h", BlockType::HeaderOne).with_text("Title"),
        ContentBlock::new("p1", BlockType::Unstyled).with_text("First paragraph."),
        ContentBlock::new("q", BlockType::Blockquote).with_text("A quote."),
    ])
}

/// The engine's default return-key behavior: split off a new empty block.
fn split_block(state: &EditorState) -> EditorState {
    let mut blocks = state.blocks().to_vec();
    let key = format!("b{}", blocks.len());
    blocks.push(ContentBlock::new(key.as_str(), BlockType::Unstyled));
    state.with_blocks(blocks)
}

#[test]
fn required_fields_are_construction_time_violations() {
    assert_eq!(
        EditorConfig::builder().build().unwrap_err(),
        ConfigError::MissingState
    );
    assert_eq!(
        EditorConfig::builder()
            .state(story_state())
            .on_change(|_| {})
            .build()
            .unwrap_err(),
        ConfigError::MissingBlockRenderMap
    );
}

#[test]
fn read_only_still_resolves_every_block_renderer() {
    // A configuration with `read_only` and nothing else optional must still
    // resolve a renderer for every block through the render map.
    let config = EditorConfig::builder()
        .state(story_state())
        .on_change(|_| {})
        .block_render_map(BlockRenderMap::default_map())
        .read_only(true)
        .build()
        .expect("config builds");

    assert!(config.read_only());
    let state = config.state().clone();
    for block in state.blocks() {
        match config.renderer_for(block) {
            Some(BlockRenderer::Stock(stock)) => assert!(!stock.element.is_empty()),
            other => panic!("block {} did not resolve: {other:?}", block.key),
        }
    }
}

#[test]
fn handled_return_suppresses_paragraph_split() {
    let delivered: Rc<RefCell<Vec<EditorState>>> = Rc::new(RefCell::new(Vec::new()));
    let outbox = Rc::clone(&delivered);
    let mut config = EditorConfig::builder()
        .state(story_state())
        .on_change(move |next| outbox.borrow_mut().push(next))
        .block_render_map(BlockRenderMap::default_map())
        .handle_return(|_| Handled::Yes)
        .build()
        .expect("config builds");

    let before = config.state().clone();
    let current = before.clone();
    let mut pending = None;
    let outcome = config.dispatch_key(&KeyEvent::plain(Key::Enter), |command| {
        if *command == EditorCommand::SplitBlock {
            pending = Some(split_block(&current));
        }
    });

    assert_eq!(outcome, Handled::Yes);
    assert!(pending.is_none(), "no default paragraph split occurred");
    assert!(delivered.borrow().is_empty());
    assert_eq!(config.state(), &before);
}

#[test]
fn absent_return_hook_splits_exactly_once_through_the_controlled_loop() {
    let delivered: Rc<RefCell<Vec<EditorState>>> = Rc::new(RefCell::new(Vec::new()));
    let outbox = Rc::clone(&delivered);
    let mut config = EditorConfig::builder()
        .state(story_state())
        .on_change(move |next| outbox.borrow_mut().push(next))
        .block_render_map(BlockRenderMap::default_map())
        .build()
        .expect("config builds");

    let current = config.state().clone();
    let mut pending = None;
    let outcome = config.dispatch_key(&KeyEvent::plain(Key::Enter), |command| {
        assert_eq!(*command, EditorCommand::SplitBlock);
        assert!(pending.is_none(), "default ran twice");
        pending = Some(split_block(&current));
    });
    assert_eq!(outcome, Handled::No);

    // Engine hands the new value to the host...
    let next = pending.expect("default ran");
    config.notify_change(next.clone());
    assert_eq!(delivered.borrow().len(), 1);

    // ...and nothing is visible until the host feeds it back.
    assert_eq!(config.state().blocks().len(), 3);
    config.set_state(delivered.borrow_mut().pop().expect("state delivered"));
    assert_eq!(config.state(), &next);
    assert_eq!(config.state().blocks().len(), 4);
}

#[test]
fn omitted_hook_behaves_like_explicit_default() {
    // A record without `handle_before_input` and one whose hook always
    // declines must produce identical observable behavior.
    let run = |config: &mut EditorConfig| {
        let defaults = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&defaults);
        let outcome = config.dispatch_before_input("abc", move || {
            counter.set(counter.get() + 1);
        });
        (outcome, defaults.get())
    };

    let mut omitted = EditorConfig::builder()
        .state(story_state())
        .on_change(|_| {})
        .block_render_map(BlockRenderMap::default_map())
        .build()
        .expect("config builds");
    let mut declining = EditorConfig::builder()
        .state(story_state())
        .on_change(|_| {})
        .block_render_map(BlockRenderMap::default_map())
        .handle_before_input(|_| Handled::No)
        .build()
        .expect("config builds");

    assert_eq!(run(&mut omitted), run(&mut declining));
    assert_eq!(run(&mut omitted), (Handled::No, 1));
}

#[test]
fn paste_handlers_see_the_drop_selection() {
    let seen: Rc<RefCell<Option<SelectionState>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&seen);
    let mut config = EditorConfig::builder()
        .state(story_state())
        .on_change(|_| {})
        .block_render_map(BlockRenderMap::default_map())
        .handle_dropped_files(move |selection, files| {
            assert_eq!(files.len(), 1);
            *slot.borrow_mut() = Some(selection.clone());
            Handled::Yes
        })
        .build()
        .expect("config builds");

    let target = SelectionState::collapsed("p1", 5);
    let files = vec![vellum_editor_core::FileBlob::new("image/png", vec![0, 1])];
    let outcome = config.dispatch_dropped_files(&target, &files, || {
        panic!("host consumed the drop");
    });
    assert_eq!(outcome, Handled::Yes);
    assert_eq!(seen.borrow().as_ref(), Some(&target));
}
