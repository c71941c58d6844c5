//! Derive macro for `tagenum`.
//!
//! - `EnumShape`: describes a named-field struct as a `tagenum::RecordShape` and generates the code that moves a
//!   populated `tagenum::Record` into the struct and back out.
//!
//! Field attributes:
//! - `#[tagenum(value = "200")]`: attached literal replacing the default value.
//! - `#[tagenum(skip)]`: the field is not assignable; it is filled with `Default::default()`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, LitStr, Type, parse_macro_input, spanned::Spanned};
use tagenum_core::lang::{self, types::TypeClass};

/// Generates `tagenum::EnumShape`, `tagenum::Inspect` and `From<T> for tagenum::Value`.
///
/// # Example
/// ```ignore
/// #[derive(EnumShape)]
/// struct HttpCode {
///     #[tagenum(value = "200")]
///     ok: i64,
///     not_found: i64,
/// }
///
/// // Generates (abridged):
/// impl tagenum::EnumShape for HttpCode {
///     fn shape() -> tagenum::RecordShape {
///         tagenum::RecordShape::new("HttpCode")
///             .field(tagenum::FieldDescriptor::new("ok", tagenum::FieldKind::Int(tagenum::IntWidth::W64)).with_literal("200"))
///             .field(tagenum::FieldDescriptor::new("not_found", tagenum::FieldKind::Int(tagenum::IntWidth::W64)))
///     }
///     // from_record / to_record ...
/// }
/// ```
#[proc_macro_derive(EnumShape, attributes(tagenum))]
pub fn derive_enum_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// One field of the struct, classified.
struct FieldSpec {
    ident: syn::Ident,
    ty: Type,
    class: TypeClass,
    literal: Option<LitStr>,
    skip: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.to_string();

    // Unit structs describe an empty record; tuple structs have no field names to use as values.
    let (fields, is_unit) = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => (fields.named.iter().map(field_spec).collect::<syn::Result<Vec<_>>>()?, false),
            Fields::Unit => (Vec::new(), true),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "EnumShape requires named fields; tuple structs are not record shapes",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "EnumShape can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "EnumShape can only be derived for structs",
            ));
        }
    };

    let generics = bounded_generics(&input.generics, &fields);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let descriptors = fields.iter().map(descriptor);
    let hydrated = fields.iter().map(hydrate);
    let dumped = fields.iter().map(dump);

    let construct_self = if is_unit {
        quote!(Self)
    } else {
        quote!(Self { #(#hydrated),* })
    };

    Ok(quote! {
        impl #impl_generics ::tagenum::EnumShape for #name #ty_generics #where_clause {
            fn shape() -> ::tagenum::RecordShape {
                ::tagenum::RecordShape::new(#name_str)
                    #(.field(#descriptors))*
            }

            #[allow(unreachable_code)]
            fn from_record(
                record: &::tagenum::Record,
            ) -> ::core::result::Result<Self, ::tagenum::EnumError> {
                let _ = record;
                ::core::result::Result::Ok(#construct_self)
            }

            fn to_record(&self) -> ::tagenum::Record {
                ::tagenum::Record::new(#name_str)
                    #(#dumped)*
            }
        }

        // The record is rebuilt on every query rather than cached: instances are small and queries are infrequent.
        impl #impl_generics ::tagenum::Inspect for #name #ty_generics #where_clause {
            fn as_record(&self) -> ::core::option::Option<::std::borrow::Cow<'_, ::tagenum::Record>> {
                ::core::option::Option::Some(::std::borrow::Cow::Owned(::tagenum::EnumShape::to_record(self)))
            }
        }

        impl #impl_generics ::core::convert::From<#name #ty_generics> for ::tagenum::Value #where_clause {
            fn from(instance: #name #ty_generics) -> Self {
                ::tagenum::Value::Record(::tagenum::EnumShape::to_record(&instance))
            }
        }

        impl #impl_generics ::core::convert::From<&#name #ty_generics> for ::tagenum::Value #where_clause {
            fn from(instance: &#name #ty_generics) -> Self {
                ::tagenum::Value::Record(::tagenum::EnumShape::to_record(instance))
            }
        }
    })
}

fn field_spec(field: &syn::Field) -> syn::Result<FieldSpec> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
    let mut literal = None;
    let mut skip = false;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident(lang::ATTRIBUTE)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(lang::VALUE_KEY) {
                literal = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else if meta.path.is_ident(lang::SKIP_KEY) {
                skip = true;
                Ok(())
            } else {
                Err(meta.error(format!(
                    "unknown {} attribute; expected `{}` or `{}`",
                    lang::ATTRIBUTE,
                    lang::VALUE_KEY,
                    lang::SKIP_KEY
                )))
            }
        })?;
    }
    Ok(FieldSpec {
        ident,
        ty: field.ty.clone(),
        class: classify(&field.ty),
        literal,
        skip,
    })
}

fn classify(ty: &Type) -> TypeClass {
    match ty {
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Reference(_) | Type::Ptr(_) => TypeClass::Pointer,
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map_or(TypeClass::Unsupported, |seg| {
                lang::types::classify(&seg.ident.to_string())
            }),
        _ => TypeClass::Unsupported,
    }
}

/// Readable spelling of a type for error messages (`Vec<u8>` rather than `Vec < u8 >`).
fn type_spelling(ty: &Type) -> String {
    quote!(#ty)
        .to_string()
        .replace(" < ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" :: ", "::")
        .replace("& ", "&")
}

fn width_tokens(width: tagenum_core::IntWidth) -> TokenStream2 {
    let variant = format_ident!("{}", width.variant_name());
    quote!(::tagenum::IntWidth::#variant)
}

fn descriptor(field: &FieldSpec) -> TokenStream2 {
    let name = field.ident.unraw().to_string();
    let ty = &field.ty;
    let spelling = type_spelling(ty);
    let kind = match field.class {
        TypeClass::Str => quote!(::tagenum::FieldKind::Str),
        TypeClass::Int(w) => {
            let w = width_tokens(w);
            quote!(::tagenum::FieldKind::Int(#w))
        }
        TypeClass::Uint(w) => {
            let w = width_tokens(w);
            quote!(::tagenum::FieldKind::Uint(#w))
        }
        // A skipped field is never read, so a nested type it names need not derive EnumShape.
        TypeClass::Record if field.skip => quote!(::tagenum::FieldKind::Unsupported(#spelling.to_string())),
        TypeClass::Record => quote!(::tagenum::FieldKind::Record(<#ty as ::tagenum::EnumShape>::shape())),
        TypeClass::Pointer => quote!(::tagenum::FieldKind::Pointer(#spelling.to_string())),
        TypeClass::Unsupported => quote!(::tagenum::FieldKind::Unsupported(#spelling.to_string())),
    };
    let literal = field.literal.as_ref().map(|lit| quote!(.with_literal(#lit)));
    let skipped = field.skip.then(|| quote!(.skipped()));
    quote!(::tagenum::FieldDescriptor::new(#name, #kind) #literal #skipped)
}

fn hydrate(field: &FieldSpec) -> TokenStream2 {
    let ident = &field.ident;
    let name = ident.unraw().to_string();
    let ty = &field.ty;
    let value = if field.skip {
        quote!(::core::default::Default::default())
    } else {
        match field.class {
            TypeClass::Str | TypeClass::Int(_) | TypeClass::Uint(_) => quote!(record.leaf::<#ty>(#name)?),
            TypeClass::Record => {
                quote!(<#ty as ::tagenum::EnumShape>::from_record(record.record(#name)?)?)
            }
            TypeClass::Pointer => quote!(
                return ::core::result::Result::Err(::tagenum::EnumError::Pointer {
                    field: #name.to_string(),
                })
            ),
            TypeClass::Unsupported => {
                let spelling = type_spelling(ty);
                quote!(
                    return ::core::result::Result::Err(::tagenum::EnumError::UnsupportedKind {
                        field: #name.to_string(),
                        kind: #spelling.to_string(),
                    })
                )
            }
        }
    };
    quote!(#ident: #value)
}

fn dump(field: &FieldSpec) -> TokenStream2 {
    let ident = &field.ident;
    let name = ident.unraw().to_string();
    if field.skip {
        return quote!(.with_untouched(#name));
    }
    match field.class {
        TypeClass::Str | TypeClass::Int(_) | TypeClass::Uint(_) => {
            quote!(.with(#name, ::tagenum::Leaf::to_value(&self.#ident)))
        }
        TypeClass::Record => quote!(
            .with(#name, ::tagenum::Value::Record(::tagenum::EnumShape::to_record(&self.#ident)))
        ),
        TypeClass::Pointer | TypeClass::Unsupported => quote!(.with_untouched(#name)),
    }
}

/// Add `FieldType: EnumShape` to the where clause for every nested field whose type mentions a type parameter.
///
/// `struct Wrapper<T> { inner: T }` then gets `where T: EnumShape` instead of failing inside the generated body.
fn bounded_generics(generics: &syn::Generics, fields: &[FieldSpec]) -> syn::Generics {
    let params: Vec<String> = generics.type_params().map(|p| p.ident.to_string()).collect();
    let mut generics = generics.clone();
    if params.is_empty() {
        return generics;
    }
    let predicates: Vec<syn::WherePredicate> = fields
        .iter()
        .filter(|f| !f.skip && f.class == TypeClass::Record)
        .map(|f| &f.ty)
        .filter(|ty| mentions_any(quote!(#ty), &params))
        .map(|ty| syn::parse_quote!(#ty: ::tagenum::EnumShape))
        .collect();
    if !predicates.is_empty() {
        generics.make_where_clause().predicates.extend(predicates);
    }
    generics
}

fn mentions_any(tokens: TokenStream2, idents: &[String]) -> bool {
    tokens.into_iter().any(|tt| match tt {
        proc_macro2::TokenTree::Ident(ident) => idents.iter().any(|p| ident == p),
        proc_macro2::TokenTree::Group(group) => mentions_any(group.stream(), idents),
        _ => false,
    })
}
