extern crate svgpath;
#[macro_use]
extern crate bencher;

use svgpath::algorithms::aabb::bounding_box;
use svgpath::path::parser::PathParser;
use svgpath::path::{ParserOptions, Path, PathSerializer};

use bencher::Bencher;

#[cfg(feature = "profiling")]
const N: usize = 100;
#[cfg(not(feature = "profiling"))]
const N: usize = 1;

fn source() -> String {
    let mut src = String::new();
    for i in 0..1_000 {
        let x = i as f32 * 0.5;
        src.push_str(&format!(
            "M{} 0 l10-5.5.5.5 h-3v4 C 1 2 3 4 5 6 s1e1 2 3 4 Q 1 1 2 2 t 3 3 a 5 4 30 1 0 {} 10 z ",
            x,
            x + 20.0
        ));
    }
    src
}

fn parse(bench: &mut Bencher) {
    let src = source();
    let mut parser = PathParser::new();
    bench.iter(|| {
        for _ in 0..N {
            let _ = parser.parse(&ParserOptions::DEFAULT, &src);
        }
    });
}

fn events(bench: &mut Bencher) {
    let path = Path::parse(&source()).unwrap();
    bench.iter(|| {
        let mut n = 0;
        for _ in 0..N {
            for evt in path.events() {
                if evt.is_edge() {
                    n += 1;
                }
            }
        }
        n
    });
}

fn flatten_arcs(bench: &mut Bencher) {
    let path = Path::parse(&source()).unwrap();
    bench.iter(|| {
        for _ in 0..N {
            let _ = path.with_flattened_arcs();
        }
    });
}

fn aabb(bench: &mut Bencher) {
    let path = Path::parse(&source()).unwrap();
    bench.iter(|| {
        for _ in 0..N {
            let _ = bounding_box(path.events());
        }
    });
}

fn serialize(bench: &mut Bencher) {
    let path = Path::parse(&source()).unwrap();
    let mut serializer = PathSerializer::new();
    bench.iter(|| {
        for _ in 0..N {
            let _ = serializer.serialize(&path);
        }
    });
}

benchmark_group!(parser, parse, serialize);

benchmark_group!(iter, events, flatten_arcs, aabb);

benchmark_main!(parser, iter);
