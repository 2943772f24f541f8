//! Basic usage example - declare a model, emit its DDL, compile a search

use fulltext_core::{
    build_boolean_query, Dialect, FullText, FullTextSearch, FulltextIndex, MatchMode, Result,
    SchemaRegistry,
};

struct Article;

impl FullText for Article {
    fn table_name() -> &'static str {
        "articles"
    }

    fn columns() -> &'static [&'static str] {
        &["title", "body"]
    }
}

fn main() -> Result<()> {
    // Schema setup: register the model, then release the deferred DDL once
    // the table has been created.
    let registry = SchemaRegistry::new();
    registry.register::<Article>()?;

    println!("DDL to run after CREATE TABLE articles:");
    for ddl in registry.after_create("articles")? {
        println!("  {}", ddl);
    }

    // Query time: compile a natural-language search predicate.
    let fragment = FullTextSearch::new::<Article>("rust database").compile(Dialect::MySql)?;
    println!("\nWHERE clause fragment: {}", fragment.sql);
    println!("Bind parameters: {:?}", fragment.params);

    // Boolean mode from raw user input.
    let term = build_boolean_query("+rust -java");
    let fragment = FullTextSearch::new::<Article>(&term)
        .mode(MatchMode::Boolean)
        .compile(Dialect::MySql)?;
    println!("\nBoolean fragment: {}", fragment.sql);
    println!("Bind parameters: {:?}", fragment.params);

    // Migration-managed schemas build the index descriptor explicitly.
    let index = FulltextIndex::for_model::<Article>()?;
    println!("\nMigration SQL: {}", index.create_sql());

    Ok(())
}
