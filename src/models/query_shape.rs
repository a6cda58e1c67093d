use clap::ValueEnum;

/// The observable read models the store offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum QueryShape {
    All,
    Today,
    Future,
    Past,
}

impl QueryShape {
    pub const ALL: [QueryShape; 4] = [
        QueryShape::All,
        QueryShape::Today,
        QueryShape::Future,
        QueryShape::Past,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryShape::All => "all",
            QueryShape::Today => "today",
            QueryShape::Future => "future",
            QueryShape::Past => "past",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            QueryShape::All => 0,
            QueryShape::Today => 1,
            QueryShape::Future => 2,
            QueryShape::Past => 3,
        }
    }
}
