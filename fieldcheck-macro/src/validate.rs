use crate::annotation::{self, Kind};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Data, DeriveInput, Error, Field, Fields, LitStr, Token, Type};

/// Arguments of `#[validate("rules", name = "Label")]`.
struct ValidateArgs {
    rules: LitStr,
    name: Option<LitStr>,
}

impl Parse for ValidateArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let rules: LitStr = input.parse()?;
        let mut name = None;

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let key: syn::Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;
            match key.to_string().as_str() {
                "name" if name.is_none() => name = Some(value),
                "name" => return Err(Error::new(key.span(), "duplicate `name` argument")),
                other => {
                    return Err(Error::new(
                        key.span(),
                        format!("unknown argument `{}`, expected `name`", other),
                    ));
                }
            }
        }

        Ok(Self { rules, name })
    }
}

/// Derive `Record` and `Validate`.
pub fn validate_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "#[derive(Validate)] does not support generic or borrowed records",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new_spanned(
                    name,
                    "#[derive(Validate)] requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                name,
                "#[derive(Validate)] can only be used on structs",
            ));
        }
    };

    let mut accessors = Vec::with_capacity(fields.len());
    let mut descriptors = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };

        let kind = classify(&field.ty);
        let args = field_args(field)?;

        let (rules, label) = match &args {
            Some(args) => {
                annotation::check(kind, &args.rules.value())
                    .map_err(|msg| Error::new(args.rules.span(), msg))?;
                let label = args
                    .name
                    .as_ref()
                    .map(LitStr::value)
                    .unwrap_or_else(|| ident.unraw().to_string());
                (args.rules.value(), label)
            }
            None => (String::new(), ident.unraw().to_string()),
        };

        let accessor = format_ident!("__fieldcheck_{}", ident.unraw());
        let value = match kind {
            Kind::String => quote! {
                ::fieldcheck::FieldValue::Str(::core::convert::AsRef::<str>::as_ref(&record.#ident))
            },
            Kind::Int => quote! {
                ::fieldcheck::FieldValue::Int(::core::convert::From::from(record.#ident))
            },
            Kind::Optional => quote! {
                ::fieldcheck::FieldValue::presence(&record.#ident)
            },
            Kind::Other => quote! {
                ::fieldcheck::FieldValue::PRESENT
            },
        };
        let field_kind = match kind {
            Kind::String => quote!(::fieldcheck::FieldKind::String),
            Kind::Int => quote!(::fieldcheck::FieldKind::Int),
            Kind::Optional | Kind::Other => quote!(::fieldcheck::FieldKind::Other),
        };

        accessors.push(quote! {
            #[allow(unused_variables, non_snake_case)]
            fn #accessor(record: &#name) -> ::fieldcheck::FieldValue<'_> {
                #value
            }
        });
        descriptors.push(quote! {
            ::fieldcheck::FieldDescriptor {
                name: #label,
                kind: #field_kind,
                rules: #rules,
                accessor: #accessor,
            }
        });
    }

    Ok(quote! {
        impl ::fieldcheck::Record for #name {
            fn descriptors() -> &'static [::fieldcheck::FieldDescriptor<Self>] {
                #(#accessors)*

                static FIELDS: &[::fieldcheck::FieldDescriptor<#name>] = &[#(#descriptors),*];
                FIELDS
            }
        }

        impl ::fieldcheck::Validate for #name {
            fn validate(&self) -> ::core::result::Result<(), ::fieldcheck::ValidationErrors> {
                ::fieldcheck::validate_record(self)
            }
        }
    })
}

fn field_args(field: &Field) -> syn::Result<Option<ValidateArgs>> {
    let mut found: Option<ValidateArgs> = None;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("validate")) {
        if found.is_some() {
            return Err(Error::new_spanned(
                attr,
                "duplicate #[validate] attribute\n\
                 hint: list every condition in one annotation, e.g. #[validate(\"required,email\")]",
            ));
        }
        found = Some(attr.parse_args::<ValidateArgs>()?);
    }
    Ok(found)
}

/// Classify a field type by its syntax.
fn classify(ty: &Type) -> Kind {
    match ty {
        Type::Reference(reference) => match &*reference.elem {
            Type::Path(path) if path.path.is_ident("str") => Kind::String,
            _ => Kind::Other,
        },
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last() else {
                return Kind::Other;
            };
            match last.ident.to_string().as_str() {
                "String" => Kind::String,
                "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" => Kind::Int,
                "Option" => Kind::Optional,
                _ => Kind::Other,
            }
        }
        _ => Kind::Other,
    }
}
