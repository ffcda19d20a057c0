use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a three component color model.
///
/// The struct must declare exactly three named fields, one for each
/// component. All of them are made public. Any generic type parameters are
/// treated as tags and backed by `PhantomData` fields, so a single definition
/// can be shared by color spaces with the same shape (Lab and Oklab).
///
/// Generated items:
/// - `new(c0, c1, c2)`
/// - `to_components()`
/// - `From<Components>` for the model and `From<Model>` for `Components`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    expand(input.into()).into()
}

fn expand(input: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    let mut input = match syn::parse2::<syn::ItemStruct>(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    if input.fields.len() != 3 {
        return syn::Error::new_spanned(
            &input.fields,
            "Models must have exactly 3 fields, one for each component of the color.",
        )
        .to_compile_error();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != 3 {
        return syn::Error::new_spanned(&input.fields, "Model fields must be named.")
            .to_compile_error();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // Only add derives when the caller did not pick their own.
    let has_derive = input.attrs.iter().any(|a| a.path().is_ident("derive"));
    if !has_derive {
        let attr = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        }) {
            Ok(attr) => attr,
            Err(err) => return err.to_compile_error(),
        };
        input.attrs.extend(attr);
    }

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    let type_params = input
        .generics
        .params
        .iter()
        .map(|g| match g {
            syn::GenericParam::Type(type_param) => Ok(type_param.ident.clone()),
            other => Err(syn::Error::new_spanned(
                other,
                "Models only support type parameters.",
            )),
        })
        .collect::<Result<Vec<_>, _>>();
    let type_params = match type_params {
        Ok(params) => params,
        Err(err) => return err.to_compile_error(),
    };

    if let syn::Fields::Named(ref mut named) = input.fields {
        for ident in type_params {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            let field = match syn::Field::parse_named.parse2(syn::parse_quote! {
                #field_name: std::marker::PhantomData<#ident>
            }) {
                Ok(field) => field,
                Err(err) => return err.to_compile_error(),
            };
            named.named.push(field);
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let impls = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color with the given components.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for crate::color::Components #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                crate::color::Components(value.#field1, value.#field2, value.#field3)
            }
        }
    };

    quote! {
        #input
        #impls
    }
}
