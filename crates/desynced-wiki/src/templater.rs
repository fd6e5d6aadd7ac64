//! Page bodies rendered from the embedded minijinja templates.

use minijinja::{context, Environment};

use crate::category::DataCategory;
use crate::constants::TEMPLATE_TABLE_INDEX;
use crate::error::Result;

const CARGO_DECLARE: &str = "cargo_declaration.jinja";
const CARGO_STORE: &str = "cargo_storage.jinja";

/// Renders declaration and storage pages.
#[derive(Debug)]
pub struct Templater {
    env: Environment<'static>,
}

impl Templater {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(CARGO_DECLARE, include_str!("templates/cargo_declaration.jinja"))?;
        env.add_template(CARGO_STORE, include_str!("templates/cargo_storage.jinja"))?;
        Ok(Self { env })
    }

    /// `Template:<table>` body: the table declaration plus the store call.
    pub fn declaration(&self, category: DataCategory, declare_args: &[String], store_args: &[String]) -> Result<String> {
        let template = self.env.get_template(CARGO_DECLARE)?;
        Ok(template.render(context! {
            table_name => category.as_str(),
            declare_args => declare_args.join("\n"),
            store_args => store_args.join("\n"),
        })?)
    }

    /// `Data/<table>/<name>` body: the storage template call for one object.
    pub fn storage(&self, category: DataCategory, name: &str, args: &[String]) -> Result<String> {
        let template = self.env.get_template(CARGO_STORE)?;
        Ok(template.render(context! {
            table_name => category.as_str(),
            template_name => category.template_title(),
            template_table_index => TEMPLATE_TABLE_INDEX,
            name => name,
            args => args.join("\n"),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_page() {
        let templater = Templater::new().unwrap();
        let page = templater
            .declaration(
                DataCategory::Item,
                &["|name = String".into(), "|stackSize = Integer".into()],
                &["|name = {{{name|}}}".into(), "|stackSize = {{{stackSize|}}}".into()],
            )
            .unwrap();

        assert_eq!(
            page,
            "<noinclude>\n\
             {{#cargo_declare:_table=item\n\
             |name = String\n\
             |stackSize = Integer\n\
             }}\n\
             </noinclude><includeonly>{{#cargo_store:_table=item\n\
             |name = {{{name|}}}\n\
             |stackSize = {{{stackSize|}}}\n\
             }}</includeonly>"
        );
    }

    #[test]
    fn test_storage_page() {
        let templater = Templater::new().unwrap();
        let page = templater
            .storage(DataCategory::TechUnlock, "Robotics - Worker", &["|techName = Robotics".into()])
            .unwrap();

        assert_eq!(
            page,
            "{{DataTechUnlock\n|techName = Robotics\n}}\n{{DataTableIndex|techUnlock|Robotics - Worker}}"
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let templater = Templater::new().unwrap();
        let page = templater
            .storage(DataCategory::Item, "A <b> & \"c\"", &["|description = <i>x</i>".into()])
            .unwrap();
        assert!(page.contains("|description = <i>x</i>"));
        assert!(page.contains("|A <b> & \"c\"}}"));
    }
}
