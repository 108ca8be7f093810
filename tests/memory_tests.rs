// Tests for the simulated heap, call stack and struct layout

use clecture::constants::{HEAP_ADDRESS_START, HEAP_DISPLAY_CAP, STACK_ADDRESS_START};
use clecture::errors::MemoryError;
use clecture::memory::heap::Realloc;
use clecture::memory::layout::ByteUse;
use clecture::memory::{struct_layout, union_layout, BlockId, CType, CallStack, Field, Heap};

#[test]
fn test_allocate_then_free_leaves_other_block() {
    let mut heap = Heap::default();
    let first = heap.allocate(4).expect("allocate");
    let second = heap.allocate(8).expect("allocate");

    assert!(heap.free(first));
    let blocks = heap.blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].id, second);
    assert_eq!(blocks[0].size, 8);

    // Second free of the same id does nothing
    assert!(!heap.free(first));
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_ids_are_never_reused() {
    let mut heap = Heap::default();
    let a = heap.allocate(4).expect("allocate");
    heap.free(a);
    let b = heap.allocate(4).expect("allocate");

    assert_ne!(a, b);
    assert!(heap.get(a).is_none());
    assert_eq!(b.to_string(), "#2");
}

#[test]
fn test_display_cap() {
    let mut heap = Heap::default();
    for _ in 0..HEAP_DISPLAY_CAP {
        heap.allocate(4).expect("allocate");
    }
    assert!(heap.is_full());

    let err = heap.allocate(4).unwrap_err();
    assert_eq!(err, MemoryError::DisplayCapReached { cap: 8 });
    assert_eq!(heap.len(), HEAP_DISPLAY_CAP);
}

#[test]
fn test_zero_size_rejected() {
    let mut heap = Heap::default();
    assert_eq!(heap.allocate(0), Err(MemoryError::ZeroSize));
    assert!(heap.is_empty());
}

#[test]
fn test_first_fit_reuses_gap() {
    let mut heap = Heap::default();
    let a = heap.allocate(4).expect("allocate");
    heap.allocate(8).expect("allocate");
    heap.free(a);

    let c = heap.allocate(2).expect("allocate");
    assert_eq!(heap.get(c).map(|b| b.address), Some(HEAP_ADDRESS_START));

    // Too big for the remaining 2-byte gap, goes after the last block
    let d = heap.allocate(4).expect("allocate");
    assert_eq!(heap.get(d).map(|b| b.address), Some(HEAP_ADDRESS_START + 12));
}

#[test]
fn test_realloc_in_place_for_last_block() {
    let mut heap = Heap::default();
    heap.allocate(4).expect("allocate");
    let b = heap.allocate(8).expect("allocate");

    let result = heap.realloc(b, 64).expect("realloc");
    assert_eq!(result, Realloc::InPlace { id: b });
    assert_eq!(heap.get(b).map(|blk| blk.size), Some(64));
    assert_eq!(heap.total_bytes(), 68);
}

#[test]
fn test_realloc_moves_when_blocked() {
    let mut heap = Heap::default();
    let a = heap
        .allocate_tagged(4, "int[1]")
        .expect("allocate");
    heap.allocate(8).expect("allocate");

    let result = heap.realloc(a, 8).expect("realloc");
    let Realloc::Moved { from, to } = result else {
        panic!("expected the block to move, got {:?}", result);
    };
    assert_eq!(from, a);
    assert_eq!(result.id(), to);
    assert!(heap.get(a).is_none());

    let moved = heap.get(to).expect("moved block");
    assert_eq!(moved.address, HEAP_ADDRESS_START + 12);
    assert_eq!(moved.size, 8);
    assert_eq!(moved.tag, "int[1]");
}

#[test]
fn test_realloc_errors() {
    let mut heap = Heap::default();
    let a = heap.allocate(4).expect("allocate");

    assert_eq!(heap.realloc(a, 0), Err(MemoryError::ZeroSize));
    assert_eq!(
        heap.realloc(BlockId(99), 4),
        Err(MemoryError::UnknownBlock { id: BlockId(99) })
    );
}

#[test]
fn test_reset_keeps_id_sequence() {
    let mut heap = Heap::default();
    let a = heap.allocate(4).expect("allocate");
    heap.reset();
    assert!(heap.is_empty());

    let b = heap.allocate(4).expect("allocate");
    assert!(b > a);
    assert_eq!(heap.get(b).map(|blk| blk.address), Some(HEAP_ADDRESS_START));
}

#[test]
fn test_segments_include_gaps() {
    let mut heap = Heap::default();
    let a = heap.allocate(4).expect("allocate");
    let b = heap.allocate(8).expect("allocate");
    heap.free(a);

    let segments = heap.segments();
    assert_eq!(segments.len(), 2);
    assert!(!segments[0].occupied);
    assert_eq!(segments[0].size, 4);
    assert_eq!(segments[1].id, Some(b));
    assert_eq!(segments[1].address, HEAP_ADDRESS_START + 4);
}

#[test]
fn test_struct_padding() {
    let layout = struct_layout(&[
        Field::new("grade", CType::Char),
        Field::new("id", CType::Int),
        Field::new("initial", CType::Char),
    ]);
    let offsets: Vec<usize> = layout.fields.iter().map(|f| f.offset).collect();
    assert_eq!(offsets, vec![0, 4, 8]);
    assert_eq!(layout.size, 12);
    assert_eq!(layout.padding(), 6);
    assert_eq!(layout.trailing_padding, 3);

    let map = layout.byte_map();
    assert_eq!(map[0], ByteUse::Field(0));
    assert_eq!(map[1], ByteUse::Padding);
    assert_eq!(map[4], ByteUse::Field(1));
    assert_eq!(map[11], ByteUse::Padding);
}

#[test]
fn test_reordering_reduces_padding() {
    let layout = struct_layout(&[
        Field::new("id", CType::Int),
        Field::new("grade", CType::Char),
        Field::new("initial", CType::Char),
    ]);
    assert_eq!(layout.size, 8);
    assert_eq!(layout.padding(), 2);
}

#[test]
fn test_array_and_pointer_members() {
    let layout = struct_layout(&[
        Field::new("name", CType::Array(Box::new(CType::Char), 10)),
        Field::new("balance", CType::Double),
        Field::new("next", CType::Pointer),
    ]);
    let offsets: Vec<usize> = layout.fields.iter().map(|f| f.offset).collect();
    assert_eq!(offsets, vec![0, 16, 24]);
    assert_eq!(layout.size, 32);
    assert_eq!(layout.fields[1].padding_before, 6);
    assert_eq!(layout.fields[0].ty.to_string(), "char[10]");
}

#[test]
fn test_union_layout() {
    let layout = union_layout(&[
        Field::new("i", CType::Int),
        Field::new("f", CType::Float),
        Field::new("str", CType::Array(Box::new(CType::Char), 20)),
    ]);
    assert_eq!(layout.size, 20);
    assert_eq!(layout.align, 4);
    assert!(layout.fields.iter().all(|f| f.offset == 0));
    // The first member covering a byte owns it in the map
    assert_eq!(layout.byte_map()[0], ByteUse::Field(0));
    assert_eq!(layout.byte_map()[19], ByteUse::Field(2));
}

#[test]
fn test_call_stack_frames() {
    let mut stack = CallStack::new();
    stack.push_frame("main").set_local("result", 0);
    stack.push_frame("factorial").set_local("n", 3);

    assert_eq!(stack.depth(), 2);
    let frames = stack.frames();
    assert_eq!(frames[0].address, STACK_ADDRESS_START);
    assert!(frames[1].address < frames[0].address);

    let top = stack.current_frame_mut().expect("frame");
    top.set_local("n", 2);
    assert_eq!(top.locals.len(), 1);
    assert_eq!(top.get_local("n"), Some(2));

    let popped = stack.pop_frame().expect("frame");
    assert_eq!(popped.function_name, "factorial");
    assert_eq!(stack.current_frame().map(|f| f.function_name.as_str()), Some("main"));

    stack.clear();
    assert!(stack.is_empty());
    assert!(stack.pop_frame().is_none());
}
