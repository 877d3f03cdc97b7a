//! Parser Benchmarks
//!
//! Run with: `cargo bench --package widl-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use widl_par::{parse, ParserOptions};

fn parse_source(source: &str) {
    parse(black_box(source), ParserOptions::new()).expect("fixture must parse");
}

fn bench_parser_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_simple");

    let source = "interface Foo { };";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("empty_interface", |b| b.iter(|| parse_source(source)));

    group.finish();
}

fn bench_parser_attributes_and_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_attributes_and_operations");

    let source = r#"
        interface Node {
            readonly attribute DOMString nodeName;
            readonly attribute Node? parentNode;
            Node appendChild(Node node);
            Node removeChild(Node node);
            boolean hasChildNodes();
        };
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("node_like_interface", |b| b.iter(|| parse_source(source)));

    group.finish();
}

fn bench_parser_dictionaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_dictionaries");

    let source = r#"
        dictionary EventInit {
            boolean bubbles = false;
            boolean cancelable = false;
            boolean composed = false;
        };

        dictionary CustomEventInit : EventInit {
            any detail = null;
        };
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("dictionary_inheritance", |b| b.iter(|| parse_source(source)));

    group.finish();
}

fn bench_parser_unions_and_generics(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_unions_and_generics");

    let source = r#"
        typedef (Node or DOMString) NodeOrString;
        typedef sequence<NodeOrString> NodeOrStringList;
        typedef record<DOMString, NodeOrString> NodeOrStringMap;

        interface NodeList {
            getter Node? item(unsigned long index);
            readonly attribute unsigned long length;
            iterable<Node>;
        };
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("unions_and_generics", |b| b.iter(|| parse_source(source)));

    group.finish();
}

fn bench_parser_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_complex");

    let source = r#"
        [Exposed=Window]
        interface EventTarget {
            undefined addEventListener(
                DOMString type,
                EventListener? callback,
                optional (AddEventListenerOptions or boolean) options
            );
            undefined removeEventListener(
                DOMString type,
                EventListener? callback,
                optional (EventListenerOptions or boolean) options
            );
            boolean dispatchEvent(Event event);
        };

        callback interface EventListener {
            undefined handleEvent(Event event);
        };

        dictionary EventListenerOptions {
            boolean capture = false;
        };

        dictionary AddEventListenerOptions : EventListenerOptions {
            boolean passive = false;
            boolean once = false;
        };

        enum DocumentReadyState { "loading", "interactive", "complete" };

        [Exposed=Window]
        interface Document : Node {
            readonly attribute DocumentReadyState readyState;
            Element? getElementById(DOMString elementId);
            Event createEvent(DOMString interfaceName);
        };

        Document includes NonElementParentNode;
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("dom_like_fragment", |b| b.iter(|| parse_source(source)));

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_simple,
    bench_parser_attributes_and_operations,
    bench_parser_dictionaries,
    bench_parser_unions_and_generics,
    bench_parser_complex
);
criterion_main!(benches);
