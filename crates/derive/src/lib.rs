//! `#[derive(Normalize)]` for `tidy_core::Normalizable`.
//!
//! The string fields of a struct are found at compile time from their
//! declared types, so no per-field wiring is written by hand:
//!
//! - `String` fields are visited as required slots,
//! - `Option<String>` fields as optional slots,
//! - every other field is left alone.
//!
//! Struct attribute `#[normalize(..)]` declares the type-level rule set
//! (`trim`, `blank_to_null`, `collapse_spaces`; unspecified options keep
//! their defaults). Without it the type is walkable but undeclared.
//!
//! Field attributes: `#[normalize(skip)]` excludes a string field,
//! `#[normalize(flatten)]` delegates to the field's own `Normalizable` impl,
//! which is how the fields of an embedded parent type are reached.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, Data, DeriveInput, Field, GenericArgument, Index, LitBool, LitStr, Member,
    Meta, PathArguments, Type, WherePredicate,
};

#[proc_macro_derive(Normalize, attributes(normalize))]
pub fn derive_normalize(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Type-level rule set, defaults matching `RuleSet::DEFAULT`.
struct Declaration {
    trim: bool,
    blank_to_null: bool,
    collapse_spaces: bool,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            trim: true,
            blank_to_null: true,
            collapse_spaces: false,
        }
    }
}

enum FieldMode {
    Auto,
    Skip,
    Flatten,
}

enum StringKind {
    Required,
    Optional,
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`Normalize` can only be derived for structs",
            ))
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`Normalize` can only be derived for structs",
            ))
        }
    };

    let ident = &input.ident;
    let owner = LitStr::new(&ident.to_string(), ident.span());
    let declared = match parse_declaration(&input)? {
        Some(Declaration {
            trim,
            blank_to_null,
            collapse_spaces,
        }) => quote! {
            ::core::option::Option::Some(::tidy_core::RuleSet::new(#trim, #blank_to_null, #collapse_spaces))
        },
        None => quote! { ::core::option::Option::None },
    };

    let mut visits = Vec::with_capacity(fields.len());
    let mut bounds: Vec<WherePredicate> = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let member = match &field.ident {
            Some(name) => Member::Named(name.clone()),
            None => Member::Unnamed(Index::from(index)),
        };
        let name = match &field.ident {
            Some(name) => LitStr::new(&name.to_string(), name.span()),
            None => LitStr::new(&index.to_string(), field.span()),
        };
        let ty = &field.ty;

        match parse_field_mode(field)? {
            FieldMode::Skip => continue,
            FieldMode::Flatten => {
                if string_kind(ty).is_some() {
                    return Err(syn::Error::new_spanned(
                        ty,
                        "`#[normalize(flatten)]` applies to a nested `Normalizable` type, not a string field",
                    ));
                }
                if !input.generics.params.is_empty() {
                    bounds.push(syn::parse_quote!(#ty: ::tidy_core::Normalizable));
                }
                visits.push(quote_spanned! { ty.span() =>
                    ::tidy_core::Normalizable::visit_string_fields(&mut self.#member, visitor)?;
                });
            }
            FieldMode::Auto => match string_kind(ty) {
                Some(StringKind::Required) => visits.push(quote! {
                    visitor(::tidy_core::StringField::required(#owner, #name, &mut self.#member))?;
                }),
                Some(StringKind::Optional) => visits.push(quote! {
                    visitor(::tidy_core::StringField::optional(#owner, #name, &mut self.#member))?;
                }),
                None => {}
            },
        }
    }

    let mut generics = input.generics.clone();
    if !bounds.is_empty() {
        generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tidy_core::Normalizable for #ident #ty_generics #where_clause {
            const DECLARED_RULES: ::core::option::Option<::tidy_core::RuleSet> = #declared;

            #[allow(unused_variables)]
            fn visit_string_fields(
                &mut self,
                visitor: &mut ::tidy_core::FieldVisitor<'_>,
            ) -> ::core::result::Result<(), ::tidy_core::NormalizeError> {
                #(#visits)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

fn parse_declaration(input: &DeriveInput) -> syn::Result<Option<Declaration>> {
    let mut declaration = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("normalize") {
            continue;
        }
        if declaration.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate `#[normalize]` attribute",
            ));
        }

        let mut parsed = Declaration::default();
        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(_) => attr.parse_nested_meta(|meta| {
                let slot = if meta.path.is_ident("trim") {
                    &mut parsed.trim
                } else if meta.path.is_ident("blank_to_null") {
                    &mut parsed.blank_to_null
                } else if meta.path.is_ident("collapse_spaces") {
                    &mut parsed.collapse_spaces
                } else {
                    return Err(meta.error(
                        "unknown option, expected `trim`, `blank_to_null` or `collapse_spaces`",
                    ));
                };
                let value: LitBool = meta.value()?.parse()?;
                *slot = value.value;
                Ok(())
            })?,
            Meta::NameValue(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected `#[normalize]` or `#[normalize(option = bool, ..)]`",
                ))
            }
        }
        declaration = Some(parsed);
    }
    Ok(declaration)
}

fn parse_field_mode(field: &Field) -> syn::Result<FieldMode> {
    let mut skip = false;
    let mut flatten = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("normalize") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else if meta.path.is_ident("flatten") {
                flatten = true;
                Ok(())
            } else {
                Err(meta.error("unknown field option, expected `skip` or `flatten`"))
            }
        })?;
        if skip && flatten {
            return Err(syn::Error::new_spanned(
                attr,
                "`skip` and `flatten` cannot be combined",
            ));
        }
    }

    Ok(match (skip, flatten) {
        (true, _) => FieldMode::Skip,
        (false, true) => FieldMode::Flatten,
        (false, false) => FieldMode::Auto,
    })
}

/// Classify a field type by its spelling. Aliases of `String` are not seen.
fn string_kind(ty: &Type) -> Option<StringKind> {
    if is_string(ty) {
        return Some(StringKind::Required);
    }
    let segment = last_segment(ty)?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 && is_string(inner) => {
            Some(StringKind::Optional)
        }
        _ => None,
    }
}

fn is_string(ty: &Type) -> bool {
    last_segment(ty)
        .is_some_and(|segment| segment.ident == "String" && segment.arguments.is_none())
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        Type::Group(group) => last_segment(&group.elem),
        _ => None,
    }
}
