//! Document Lifecycle
//!
//! This demo drives a document through review with a statewise machine.
//!
//! Key concepts:
//! - Declaring transitions per source state
//! - Wildcard and specific callbacks, fired in bucket order
//! - Rejected transitions as ordinary outcomes
//! - Relaying extra arguments to callbacks
//!
//! Run with: cargo run --example lifecycle

use statewise::{state_enum, CallbackBuilder, Extras, MachineBuilder, TransitionOutcome};

state_enum! {
    enum Document {
        Draft => "draft",
        Review => "review",
        Published => "published",
        Archived => "archived",
    }
}

fn main() -> statewise::Result<()> {
    println!("=== Document Lifecycle Demo ===\n");

    let mut machine = MachineBuilder::new()
        .initial(Document::Draft)
        .transition(Document::Draft, [Document::Review])
        .transition(Document::Review, [Document::Draft, Document::Published])
        .transition(Document::Published, [Document::Archived])
        .on_transition(CallbackBuilder::new().call(|event| {
            println!("  [audit] {} -> {}", event.from, event.to);
        }))
        .on_transition(
            CallbackBuilder::new()
                .from(Document::Review)
                .to(Document::Published)
                .call(|event| {
                    let editor = event.extras.get::<&str>(0).copied().unwrap_or("unknown");
                    println!("  [notify] published by {editor}");
                }),
        )
        .build()?;

    println!("Initial state: {}", machine.state());
    println!("Allowed: {:?}\n", machine.allowed_transitions());

    match machine.transition_to(Document::Published)? {
        TransitionOutcome::Transitioned { previous } => println!("Moved from {previous}"),
        TransitionOutcome::Rejected { current, target } => {
            println!("Cannot publish yet: {current} -> {target} is not declared")
        }
    }

    machine.transition_to_strict(Document::Review)?;
    machine.transition_to_strict_with(Document::Published, Extras::new().arg("ada"))?;
    machine.transition_to_strict(Document::Archived)?;

    println!("\nFinal state: {}", machine.state());
    println!("Terminal: {}", machine.is_terminal());

    if let Err(error) = machine.transition_to_strict(Document::Draft) {
        println!("Strict move refused: {error}");
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
