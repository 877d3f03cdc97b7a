//! Benchmark the lexer over a representative IDL fragment, grounded on
//! the teacher's `faxc-lex/benches/lexer_bench.rs`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use widl_lex::tokenise;

const SAMPLE: &str = r#"
[Exposed=Window]
interface Node : EventTarget {
  readonly attribute DOMString nodeName;
  readonly attribute Document? ownerDocument;
  Node appendChild(Node node);
  sequence<Node> childNodes();
  attribute (Node or DOMString)? textContent;
};

dictionary NodeInit {
  required DOMString name;
  boolean enabled = true;
};

enum DocumentReadyState { "loading", "interactive", "complete" };

typedef (Node or DOMString) NodeOrString;
"#;

fn bench_tokenise(c: &mut Criterion) {
    c.bench_function("tokenise_sample", |b| {
        b.iter(|| tokenise(black_box(SAMPLE)).unwrap())
    });
}

criterion_group!(benches, bench_tokenise);
criterion_main!(benches);
