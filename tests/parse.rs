use wavefront::error::{Directive, Location, Malformation};
use wavefront::{parse, Error, Mesh, Options, Parser, UnknownDirectives, Vertex};

fn parse_all(text: &str) -> Result<Vec<Mesh>, Error> {
    parse(text).collect()
}

#[test]
fn cube() {
    let meshes = parse_all("o Cube\nv 1.0 2.0 3.0\nv 4.0 5.0 6.0\n").unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].name(), "Cube");
    assert_eq!(
        meshes[0].vertices(),
        &[Vertex::new(1.0, 2.0, 3.0), Vertex::new(4.0, 5.0, 6.0)]
    );
}

#[test]
fn preserves_order() {
    let meshes = parse_all("o A\nv 1.0 1.0 1.0\nv 2.0 2.0 2.0\no B\nv 3.0 3.0 3.0").unwrap();
    let names: Vec<_> = meshes.iter().map(Mesh::name).collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(
        meshes[0].vertices(),
        &[Vertex::new(1.0, 1.0, 1.0), Vertex::new(2.0, 2.0, 2.0)]
    );
    assert_eq!(meshes[1].vertices(), &[Vertex::new(3.0, 3.0, 3.0)]);
}

#[test]
fn emits_final_mesh() {
    let meshes = parse_all("o Last\nv 0.5 0.25 0.125").unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].len(), 1);
}

#[test]
fn empty_meshes() {
    let meshes = parse_all("o A\no B\n").unwrap();
    assert_eq!(meshes.len(), 2);
    assert!(meshes.iter().all(Mesh::is_empty));
}

#[test]
fn empty_text() {
    assert!(parse_all("").unwrap().is_empty());
    assert!(parse_all("\n\n   \n# nothing here\n").unwrap().is_empty());
}

#[test]
fn component_count() {
    let meshes = parse_all("o M\nv 1.0 2.0 3.0\nv 1.0 2.0 3.0 0.5").unwrap();
    assert_eq!(meshes[0].vertices()[0].len(), 3);
    assert_eq!(meshes[0].vertices()[0].w, None);
    assert_eq!(meshes[0].vertices()[1], Vertex::homogeneous(1.0, 2.0, 3.0, 0.5));

    assert_eq!(
        parse_all("o M\nv 1.0 2.0").unwrap_err(),
        Error::MalformedDirective {
            directive: Directive::Vertex,
            location: Location { line: 2, column: 1 },
            problem: Malformation::MissingComponents { found: 2 },
        }
    );
    assert_eq!(
        parse_all("o M\nv 1.0 2.0 3.0 4.0 5.0").unwrap_err(),
        Error::MalformedDirective {
            directive: Directive::Vertex,
            location: Location { line: 2, column: 19 },
            problem: Malformation::TooManyComponents,
        }
    );
}

#[test]
fn decimal_grammar() {
    let meshes = parse_all("o M\nv -1.5 0.0 10.25").unwrap();
    assert_eq!(meshes[0].vertices(), &[Vertex::new(-1.5, 0.0, 10.25)]);

    for bad in ["1", "1.", ".5", "1e3", "+1.0", "nan", "1.0.0", "--1.0"] {
        let text = format!("o M\nv 0.0 {bad} 0.0");
        assert_eq!(
            parse_all(&text).unwrap_err(),
            Error::MalformedDirective {
                directive: Directive::Vertex,
                location: Location { line: 2, column: 7 },
                problem: Malformation::InvalidComponent(bad.to_owned()),
            },
            "{bad:?} should not be a valid component"
        );
    }
}

#[test]
fn vertex_without_mesh() {
    assert_eq!(
        parse_all("v 1.0 2.0 3.0\no Cube").unwrap_err(),
        Error::VertexWithoutMesh {
            location: Location { line: 1, column: 1 }
        }
    );
}

#[test]
fn object_without_name() {
    let err = parse_all("o   \nv 1.0 2.0 3.0").unwrap_err();
    assert_eq!(
        err,
        Error::MalformedDirective {
            directive: Directive::Object,
            location: Location { line: 1, column: 1 },
            problem: Malformation::MissingName,
        }
    );
    // the name must be on the same line as the directive
    assert!(parse_all("o\nCube").is_err());
}

#[test]
fn words_after_object_name() {
    assert_eq!(
        parse_all("o Left Wing\nv 1.0 2.0 3.0").unwrap_err(),
        Error::MalformedDirective {
            directive: Directive::Object,
            location: Location { line: 1, column: 8 },
            problem: Malformation::TrailingWords("Wing".to_owned()),
        }
    );
    // a directive on the same line as an object name is not silently dropped
    assert_eq!(
        parse_all("o A v 1.0 2.0 3.0").unwrap_err(),
        Error::MalformedDirective {
            directive: Directive::Object,
            location: Location { line: 1, column: 5 },
            problem: Malformation::TrailingWords("v".to_owned()),
        }
    );
}

#[test]
fn rejects_normals() {
    assert_eq!(
        parse_all("o M\nv 1.0 2.0 3.0\n  vn 0.0 1.0 0.0\n").unwrap_err(),
        Error::UnsupportedDirective {
            directive: "vn".to_owned(),
            location: Location { line: 3, column: 3 },
        }
    );
}

#[test]
fn rejects_unknown_directives() {
    let err = parse_all("o M\nv 1.0 2.0 3.0\nf 1 2 3").unwrap_err();
    assert!(matches!(err, Error::UnsupportedDirective { ref directive, .. } if directive == "f"));
    assert_eq!(err.location(), Location { line: 3, column: 1 });
}

#[test]
fn skips_unknown_directives() {
    let options = Options {
        unknown_directives: UnknownDirectives::Skip,
    };
    let text = "mtllib cube.mtl\no M\nv 1.0 2.0 3.0\nusemtl red\ns 1\nf 1 1 1\n";
    let meshes = Parser::<f64>::with_options(text, options)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].vertices(), &[Vertex::new(1.0, 2.0, 3.0)]);

    // directives which look like `o` or `v` are never skipped
    for confusable in ["vn 0.0 1.0 0.0", "vt 0.5 0.5", "off"] {
        let text = format!("o M\n{confusable}");
        let res: Result<Vec<Mesh>, _> = Parser::with_options(&text, options).collect();
        assert!(
            matches!(res, Err(Error::UnsupportedDirective { .. })),
            "{confusable:?} should be rejected"
        );
    }
}

#[test]
fn comments() {
    let text = "# exported by hand\no Cube # the only object\n# v 9.0 9.0 9.0\nv 1.0 2.0 3.0#trailing\n";
    let meshes = parse_all(text).unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].name(), "Cube");
    assert_eq!(meshes[0].vertices(), &[Vertex::new(1.0, 2.0, 3.0)]);
}

#[test]
fn crlf() {
    let meshes = parse_all("o Cube\r\nv 1.0 2.0 3.0\r\n").unwrap();
    assert_eq!(meshes[0].name(), "Cube");
    assert_eq!(meshes[0].vertices(), &[Vertex::new(1.0, 2.0, 3.0)]);

    // `\r\n` is one line ending, not two
    assert_eq!(
        parse_all("o Cube\r\nv 1.0\r\n").unwrap_err().location(),
        Location { line: 2, column: 1 }
    );
}

#[test]
fn carriage_return_line_endings() {
    let meshes = parse_all("o Cube\rv 1.0 2.0 3.0\rv 4.0 5.0 6.0").unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(
        meshes[0].vertices(),
        &[Vertex::new(1.0, 2.0, 3.0), Vertex::new(4.0, 5.0, 6.0)]
    );

    assert_eq!(
        parse_all("o A\rv 1.0 2.0 3.0\rvn 0.0 1.0 0.0").unwrap_err(),
        Error::UnsupportedDirective {
            directive: "vn".to_owned(),
            location: Location { line: 3, column: 1 },
        }
    );
}

#[test]
fn comment_ends_at_carriage_return() {
    // the text after `\r` is on its own line, so it can't become a component of the vertex
    assert_eq!(
        parse_all("o A\nv 1.0 2.0 3.0 # c\r 4.0").unwrap_err(),
        Error::UnsupportedDirective {
            directive: "4.0".to_owned(),
            location: Location { line: 3, column: 2 },
        }
    );
    let meshes = parse_all("o A # first\rv 1.0 2.0 3.0 # c\rv 4.0 5.0 6.0").unwrap();
    assert_eq!(
        meshes[0].vertices(),
        &[Vertex::new(1.0, 2.0, 3.0), Vertex::new(4.0, 5.0, 6.0)]
    );
}

#[test]
fn lazy() {
    // the error in the second mesh isn't reached until the second mesh is requested
    let mut parser = parse("o A\nv 1.0 2.0 3.0\no B\nv 1\n");
    assert_eq!(parser.next().unwrap().unwrap().name(), "A");
    assert!(parser.next().unwrap().is_err());
    assert!(parser.next().is_none());
    assert!(parser.next().is_none());
}

#[test]
fn single_precision() {
    let meshes = Parser::<f32>::new("o M\nv 0.1 0.2 0.3")
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(meshes[0].vertices(), &[Vertex::new(0.1f32, 0.2, 0.3)]);
}

#[test]
fn error_messages() {
    let err = parse_all("o M\nv 1.0 x 3.0").unwrap_err();
    assert_eq!(
        err.to_string(),
        "2:7: malformed `v` directive: `x` is not a decimal number of the form `digits.digits`"
    );
    let err = parse_all("v 1.0 2.0 3.0").unwrap_err();
    assert_eq!(
        err.to_string(),
        "1:1: vertex appears before any `o` directive"
    );
}

#[test]
fn comment_stripping() {
    use std::borrow::Cow;
    use wavefront::de::strip_comments;

    assert!(matches!(strip_comments("o Cube\nv 1.0 2.0 3.0"), Cow::Borrowed(_)));
    assert_eq!(
        strip_comments("# header\no Cube # name\r\nv 1.0 2.0 3.0#"),
        "\no Cube \r\nv 1.0 2.0 3.0"
    );
    assert_eq!(strip_comments("##\n#"), "\n");
}
