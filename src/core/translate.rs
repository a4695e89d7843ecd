use super::table::TranslationTable;

/// Rewrites rendered key paths into their localized form.
///
/// Each `.`-separated segment is looked up in the table. Index annotations
/// (`[0]`) stay attached to their segment untouched, and names the table
/// doesn't know are kept as they are.
#[derive(Debug, Clone)]
pub struct KeyTranslator {
    table: TranslationTable,
}

impl KeyTranslator {
    pub fn new(table: TranslationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Translate a rendered path, e.g. `product.category[0]` -> `产品.类别[0]`.
    pub fn translate(&self, path: &str) -> String {
        path.split('.')
            .map(|segment| self.translate_segment(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn translate_segment(&self, segment: &str) -> String {
        if let Some(bracket) = segment.find('[')
            && segment.contains(']')
        {
            let (base, suffix) = segment.split_at(bracket);
            return format!("{}{}", self.lookup(base), suffix);
        }
        self.lookup(segment).to_string()
    }

    fn lookup<'a>(&'a self, name: &'a str) -> &'a str {
        self.table.get(name).unwrap_or(name)
    }
}
