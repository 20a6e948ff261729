use crate::context::{CompileOptions, CompilerContext};
use crate::error::{ConvertError, ConvertResult};
use crate::naming::to_ts_field_name;
use tracing::{debug, info, instrument};
use tsconvert_parser::ast::{Declaration, Document, Field};
use tsconvert_typemap::{CodeGenerator, TypeMapper, TypeScriptGenerator};

/// Render every declaration of a document as a TypeScript interface.
///
/// Declarations are written in document order. Any mapping error aborts the
/// whole compilation, so partial output is never returned.
#[instrument(skip(document, options), fields(declarations = document.declarations.len()))]
pub fn compile_document(document: &Document, options: CompileOptions) -> ConvertResult<String> {
    let mapper = TypeMapper::new(options.type_map_options())
        .with_known_types(document.declaration_names());
    let ts_gen = TypeScriptGenerator::new();
    let ctx = CompilerContext::new(options);

    for declaration in &document.declarations {
        compile_declaration(declaration, &mapper, &ts_gen, &ctx)?;
    }

    info!(
        declarations = document.declarations.len(),
        "Compiled TypeScript interfaces"
    );
    Ok(ctx.get_output())
}

fn compile_declaration(
    declaration: &Declaration,
    mapper: &TypeMapper,
    ts_gen: &impl CodeGenerator,
    ctx: &CompilerContext,
) -> ConvertResult<()> {
    debug!(declaration = %declaration.name, fields = declaration.fields.len(), "Compiling declaration");

    let export = if ctx.options.export { "export " } else { "" };
    ctx.add_line(&format!("{}interface {} {{", export, declaration.name));
    ctx.indent();

    for field in &declaration.fields {
        let line = compile_field(declaration, field, mapper, ts_gen)?;
        ctx.add_line(&format!("{};", line));
    }

    ctx.dedent();
    ctx.add_line("}");
    Ok(())
}

fn compile_field(
    declaration: &Declaration,
    field: &Field,
    mapper: &TypeMapper,
    ts_gen: &impl CodeGenerator,
) -> ConvertResult<String> {
    let prop = mapper
        .map(&field.source_type)
        .map_err(|e| ConvertError::from_type_map(&declaration.name, &field.name, e))?
        .into_property();

    Ok(ts_gen.generate_property(&to_ts_field_name(&field.name), &prop))
}
