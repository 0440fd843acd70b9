//! Go source fixtures shared by the integration tests.

/// Interfaces, including a multi-line signature and a comment line.
pub const SHAPES_API: &str = "\
package shapes

// Shape is anything with an area.
type Shape interface {
\t// Area returns the surface.
\tArea() float64
\tScale(
\t\tfactor float64,
\t) Shape
}

type Named interface {
\tName() string
}
";

/// Concrete types implementing the interfaces above.
pub const SHAPES_IMPL: &str = "\
package shapes

type Square struct{ side float64 }

func (s *Square) Area() float64 { return s.side * s.side }

func (s *Square) Scale(
\tfactor float64,
) Shape {
\treturn &Square{side: s.side * factor}
}

func (Square) Name() string { return \"square\" }

type Circle struct{ r float64 }

func (c Circle) Area() float64 {
\treturn 3.14159 * c.r * c.r
}
";

/// The canonical multi-line reader example.
pub const READER: &str = "\
type Reader interface {
    Read(p []byte) (
        n int, err error)
}
";

/// A grab bag of awkward but legal-looking Go.
pub const MIXED: &str = "\
package mixed

import \"io\"

type Store interface {
\tGet(key string) ([]byte, error)
\tPut(
\t\tkey string,
\t\tvalue []byte,
\t) error
\tio.Closer
}

/* type Hidden interface {
\tNope()
} */

type Empty interface{}

func (*Handler) Serve() {}

func (db *DB) Get(key string) ([]byte, error) {
\tif key == \"\" {
\t\treturn nil, nil
\t}
\treturn db.m[key], nil
}

func plain() {}

type Visitor interface {
\tVisit(n Node) (w Visitor)
\tLeave(
\t\tn Node,
\t)
}
";
