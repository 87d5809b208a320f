//! Source rendering for typed flag wrappers.
//!
//! This module turns a [`GenerationRequest`] into the full text of the
//! generated source file: one shared package header followed by one
//! type-and-accessor block per descriptor, in descriptor order.
//!
//! The template text is an embedded asset of the generator; only the
//! descriptor data varies between runs. Rendering is a pure text
//! substitution with no failure mode, and a pure function of the request:
//! the same request always produces byte-identical output.

use crate::descriptor::FlagDescriptor;

/// Everything the renderer consumes for one invocation.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Package the generated source belongs to.
    pub package_name: String,

    /// Flag types to generate, in emission order.
    pub flags: Vec<FlagDescriptor>,
}

/// Renders the full generated document.
///
/// The renderer performs no sorting, deduplication, or uniqueness checks;
/// it emits exactly what it is given, in order. Name validation happens in
/// the descriptor loader.
pub fn render(request: &GenerationRequest) -> String {
    let mut source = render_header(&request.package_name);
    for flag in &request.flags {
        source.push('\n');
        source.push_str(&render_flag(flag));
    }
    source
}

fn render_header(package_name: &str) -> String {
    format!(
        r#"// Code generated by flaggen; DO NOT EDIT.

package {}

import (
	"flag"
	"strconv"
	"time"
)
"#,
        package_name
    )
}

fn render_flag(flag: &FlagDescriptor) -> String {
    [
        render_type_definition(flag),
        render_fixed_accessors(flag),
        render_context_accessors(flag),
        render_lookup(flag),
    ]
    .join("\n")
}

fn render_type_definition(flag: &FlagDescriptor) -> String {
    let mut definition = format!(
        "// {name}Flag is a flag with type {ty}{doctail}\ntype {name}Flag struct {{\n",
        name = flag.name,
        ty = flag.value_type,
        doctail = flag.doctail,
    );
    definition.push_str("\tName        string\n");
    definition.push_str("\tUsage       string\n");
    definition.push_str("\tEnvVar      string\n");
    definition.push_str("\tFilePath    string\n");
    definition.push_str("\tRequired    bool\n");
    definition.push_str("\tHidden      bool\n");
    if flag.has_value {
        definition.push_str(&format!("\tValue       {}\n", flag.value_type));
    }
    if flag.has_destination {
        definition.push_str(&format!("\tDestination *{}\n", flag.value_type));
    }
    definition.push_str("}\n");
    definition
}

fn render_fixed_accessors(flag: &FlagDescriptor) -> String {
    format!(
        r#"// String returns a readable representation of this value
// (for usage defaults)
func (f {name}Flag) String() string {{
	return FlagStringer(f)
}}

// GetName returns the name of the flag
func (f {name}Flag) GetName() string {{
	return f.Name
}}

// IsRequired returns whether or not the flag is required
func (f {name}Flag) IsRequired() bool {{
	return f.Required
}}
"#,
        name = flag.name
    )
}

fn render_context_accessors(flag: &FlagDescriptor) -> String {
    format!(
        r#"// {name} looks up the value of a local {name}Flag, returns
// {default} if not found
func (c *Context) {name}(name string) {ret} {{
	return lookup{name}(name, c.flagSet)
}}

// Global{name} looks up the value of a global {name}Flag, returns
// {default} if not found
func (c *Context) Global{name}(name string) {ret} {{
	if fs := lookupGlobalFlagSet(name, c); fs != nil {{
		return lookup{name}(name, fs)
	}}
	return {default}
}}
"#,
        name = flag.name,
        ret = flag.return_type(),
        default = flag.context_default,
    )
}

fn render_lookup(flag: &FlagDescriptor) -> String {
    let parse_expression = if flag.parser.is_empty() {
        "f.Value, error(nil)"
    } else {
        flag.parser.as_str()
    };
    let return_expression = if flag.parser_cast.is_empty() {
        "parsed"
    } else {
        flag.parser_cast.as_str()
    };

    format!(
        r#"func lookup{name}(name string, set *flag.FlagSet) {ret} {{
	f := set.Lookup(name)
	if f != nil {{
		parsed, err := {parse}
		if err != nil {{
			return {default}
		}}
		return {cast}
	}}
	return {default}
}}
"#,
        name = flag.name,
        ret = flag.return_type(),
        parse = parse_expression,
        cast = return_expression,
        default = flag.context_default,
    )
}
