use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DataStruct, Fields, Ident, Type, Visibility};

/// Generates the resumable plan for a named-field struct: the dictionary
/// framing machine, a symbol sub-plan for keys, one plan slot for the
/// field currently in flight, and an `Option` per field for presence.
pub fn decode(name: Ident, vis: Visibility, data: DataStruct) -> TokenStream {
    let fields = match data.fields {
        Fields::Named(fields) => fields.named,
        // the caller only hands us named-field structs
        _ => unreachable!(),
    };

    let idents: Vec<Ident> = fields
        .iter()
        .map(|field| field.ident.clone().unwrap())
        .collect();
    let strs: Vec<String> = idents.iter().map(ToString::to_string).collect();
    let tys: Vec<Type> = fields.iter().map(|field| field.ty.clone()).collect();
    let variants: Vec<Ident> = idents
        .iter()
        .map(|ident| format_ident!("__field_{}", ident))
        .collect();
    // presence slots carry a prefix so user fields named `state`, `key`, or
    // `active` cannot collide with the plan's own fields
    let slots: Vec<Ident> = idents
        .iter()
        .map(|ident| format_ident!("__slot_{}", ident))
        .collect();

    let plan_name = format_ident!("{}Plan", name);
    let field_enum = format_ident!("{}FieldPlan", name);
    // a second binding over the full slot list, for the presence check
    // nested inside the per-field repetition; pre-expanded to a token
    // stream because quote cannot detect an iterator for a repetition
    // written directly inside another repetition
    let all = slots.clone();
    let all_present = quote! { #(&& self.#all.is_some())* };

    let imp = quote! {
        const _: () = {
            #[allow(non_camel_case_types)]
            enum #field_enum {
                #(#variants(<#tys as ::syrup::encoding::Decode>::Plan),)*
            }

            /// Generated by `#[derive(Decode)]`.
            #[allow(non_snake_case)]
            #vis struct #plan_name {
                state: ::syrup::encoding::StructState,
                key: <::syrup::Symbol as ::syrup::encoding::Decode>::Plan,
                active: ::std::option::Option<#field_enum>,
                #(#slots: ::std::option::Option<#tys>,)*
            }

            impl ::std::default::Default for #plan_name {
                fn default() -> Self {
                    #plan_name {
                        state: ::std::default::Default::default(),
                        key: ::std::default::Default::default(),
                        active: ::std::option::Option::None,
                        #(#slots: ::std::option::Option::None,)*
                    }
                }
            }

            impl ::syrup::encoding::Plan for #plan_name {
                type Output = #name;

                fn feed(
                    &mut self,
                    tok: ::syrup::scan::Token<'_>,
                ) -> ::std::result::Result<
                    ::syrup::encoding::Step<#name>,
                    ::syrup::errors::Error,
                > {
                    use ::syrup::encoding::{Plan as _, Step, StructState};
                    use ::syrup::errors::Error;
                    use ::syrup::scan::Token;

                    match self.state {
                        StructState::Start => {
                            match tok {
                                Token::DictStart => {
                                    self.state = StructState::Key;
                                    ::std::result::Result::Ok(Step::More)
                                }
                                _ => ::std::result::Result::Err(Error::ExpectedDictionaryStart),
                            }
                        }
                        StructState::Key => {
                            if let Token::DictEnd = tok {
                                #(if self.#slots.is_none() {
                                    return ::std::result::Result::Err(
                                        Error::MissingKey(#strs),
                                    );
                                })*
                                return ::std::result::Result::Ok(Step::Done(#name {
                                    #(#idents: self.#slots.take().unwrap(),)*
                                }));
                            }
                            match self.key.feed(tok)? {
                                Step::More => ::std::result::Result::Ok(Step::More),
                                Step::Done(sym) => {
                                    self.key = ::std::default::Default::default();
                                    match sym.as_str() {
                                        #(#strs => {
                                            if self.#slots.is_some() {
                                                return ::std::result::Result::Err(
                                                    Error::KeyFoundBefore(
                                                        #strs.to_string(),
                                                    ),
                                                );
                                            }
                                            self.active = ::std::option::Option::Some(
                                                #field_enum::#variants(
                                                    ::std::default::Default::default(),
                                                ),
                                            );
                                            self.state = StructState::Value;
                                            ::std::result::Result::Ok(Step::More)
                                        })*
                                        other => {
                                            ::std::result::Result::Err(Error::UnknownKey(
                                                other.to_string(),
                                            ))
                                        }
                                    }
                                }
                            }
                        }
                        StructState::Value => {
                            match self.active.take() {
                                ::std::option::Option::None => {
                                    ::std::result::Result::Err(Error::UnexpectedToken)
                                }
                                #(::std::option::Option::Some(
                                    #field_enum::#variants(mut plan),
                                ) => {
                                    match plan.feed(tok)? {
                                        Step::More => {
                                            self.active = ::std::option::Option::Some(
                                                #field_enum::#variants(plan),
                                            );
                                            ::std::result::Result::Ok(Step::More)
                                        }
                                        Step::Done(v) => {
                                            self.#slots = ::std::option::Option::Some(v);
                                            self.state = if true #all_present {
                                                StructState::End
                                            } else {
                                                StructState::Key
                                            };
                                            ::std::result::Result::Ok(Step::More)
                                        }
                                    }
                                })*
                                #[allow(unreachable_patterns)]
                                _ => ::std::result::Result::Err(Error::UnexpectedToken),
                            }
                        }
                        StructState::End => {
                            match tok {
                                Token::DictEnd => {
                                    ::std::result::Result::Ok(Step::Done(#name {
                                        #(#idents: self.#slots.take().unwrap(),)*
                                    }))
                                }
                                _ => ::std::result::Result::Err(Error::ExpectedDictionaryEnd),
                            }
                        }
                    }
                }
            }

            impl ::syrup::encoding::Decode for #name {
                type Plan = #plan_name;
            }
        };
    };

    imp.into()
}
