use ostruct::{Interner, OpenStruct};

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i64),
    String(String),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let mut interner = Interner::new();
    let mut profile = OpenStruct::from_pairs(
        &mut interner,
        [
            ("name", Value::String("Alice".into())),
            ("age", Value::Int(30)),
        ],
    )?;

    let age = interner.intern("age");
    tracing::info!("age() -> {:?}", profile.try_handle(&mut interner, age, &[])?);

    let set_age = interner.intern("age=");
    let handled = profile.try_handle(&mut interner, set_age, &[Value::Int(31)])?;
    tracing::info!("age=(31) -> {handled:?}");

    let set_email = interner.intern("email=");
    profile.try_handle(
        &mut interner,
        set_email,
        &[Value::String("alice@example.com".into())],
    )?;

    for (name, value) in profile.pairs() {
        tracing::info!("{} = {value:?}", interner.name(name))
    }
    tracing::info!("{} attributes", profile.len());
    Ok(())
}
