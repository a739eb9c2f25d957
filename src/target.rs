use clap::ValueEnum;
use url::Url;

use crate::extract::mysql::MysqlExtractor;
use crate::extract::postgres::PostgresExtractor;
use crate::extract::sqlite::SqliteExtractor;
use crate::extract::Extractor;

const POSTGRES_DOCS_URL: &str = "https://www.postgresql.org/docs/12/functions.html";
const SQLITE_DOCS_URL: &str = "https://www.sqlite.org/lang_corefunc.html";
const MYSQL_DOCS_URL: &str = "https://dev.mysql.com/doc/refman/8.0/en/functions.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Postgres,
    Sqlite,
    Mysql,
}

/// Everything that differs between databases: where to start, which links
/// to follow, which URLs may be fetched at all, and how pages are read.
pub struct Profile {
    pub seed_url: String,
    pub link_predicate: fn(&str) -> bool,
    pub admission: fn(&Url) -> bool,
    pub extractor: Box<dyn Extractor>,
}

impl Target {
    pub fn profile(self) -> Profile {
        match self {
            Target::Postgres => Profile {
                seed_url: POSTGRES_DOCS_URL.to_string(),
                link_predicate: |text| text.contains("Functions"),
                admission: admit_all,
                extractor: Box::new(PostgresExtractor),
            },
            Target::Sqlite => Profile {
                seed_url: SQLITE_DOCS_URL.to_string(),
                link_predicate: |text| text.contains("functions"),
                admission: admit_all,
                extractor: Box::new(SqliteExtractor),
            },
            Target::Mysql => Profile {
                seed_url: MYSQL_DOCS_URL.to_string(),
                link_predicate: |text| text.contains("Function"),
                admission: within_mysql_8,
                extractor: Box::new(MysqlExtractor),
            },
        }
    }
}

impl Profile {
    pub fn with_seed(mut self, seed_url: Option<String>) -> Self {
        if let Some(url) = seed_url {
            self.seed_url = url;
        }
        self
    }
}

fn admit_all(_: &Url) -> bool {
    true
}

/// Stay inside the 8.0 manual: any URL without an "8" in it is out.
fn within_mysql_8(url: &Url) -> bool {
    url.as_str().contains('8')
}

// ── Tests ──
