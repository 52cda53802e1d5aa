use stack::Stack;

// This example uses a stack as the undo history of a tiny append-only text
// editor: each edit pushes the previous document state, and undo pops it
// back.
fn main() {
    let mut history = Stack::new();
    let mut document = String::new();

    // Apply some edits, remembering the state each one replaced.
    for edit in ["hello", ", ", "world", "!"] {
        history.push(document.clone());
        document.push_str(edit);
    }
    println!("document: {document:?}");

    // Walk the history newest-first with the explicit cursor protocol.
    let mut cursor = history.iter();
    while cursor.advance() {
        let state = cursor.current().unwrap();
        println!("undo would restore {state:?}");
    }

    // The same traversal, driven as a plain for loop.
    cursor.reset();
    for state in cursor {
        eprintln!("history entry: {state:?}");
    }

    // Unwind every edit.
    while let Ok(state) = history.pop() {
        document = state;
    }
    assert!(document.is_empty());
    assert!(history.is_empty());
    println!("rewound to {document:?}");
}
